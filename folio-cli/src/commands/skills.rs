//! Skills command - proficiency bars on the skills section

use anyhow::Result;
use clap::Subcommand;
use folio_core::domain::skill::DEFAULT_LEVEL;
use folio_core::{Error, LogEvent, OperationResult, Skill};

use super::{get_admin_context, get_context, get_logger, log_event};
use crate::output;

#[derive(Subcommand)]
pub enum SkillsCommands {
    /// List skills with their levels
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a skill (admin)
    Add {
        /// Skill name
        name: String,
        /// Proficiency level (0-100)
        #[arg(long, default_value_t = DEFAULT_LEVEL)]
        level: u8,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a skill (admin)
    Remove {
        /// Skill name (case-insensitive)
        name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change a skill's level (admin)
    Level {
        /// Skill name (case-insensitive)
        name: String,
        /// New proficiency level (0-100)
        level: u8,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: SkillsCommands) -> Result<()> {
    match command {
        SkillsCommands::List { json } => run_list(json),
        SkillsCommands::Add { name, level, json } => {
            let mut ctx = get_admin_context()?;
            ctx.skills.add(&name, level)?;
            log_event(&get_logger(), LogEvent::new("skill_added").with_command("skills add"));
            report(ctx.skills.get(name.trim()), json, &format!("Added skill '{}' at {}%", name.trim(), level))
        }
        SkillsCommands::Remove { name, json } => {
            let mut ctx = get_admin_context()?;
            let removed = ctx.skills.get(&name).cloned();
            if !ctx.skills.remove(&name)? {
                return Err(Error::not_found(format!("skill '{}'", name)).into());
            }
            log_event(&get_logger(), LogEvent::new("skill_removed").with_command("skills remove"));
            report(removed.as_ref(), json, &format!("Removed skill '{}'", name))
        }
        SkillsCommands::Level { name, level, json } => {
            let mut ctx = get_admin_context()?;
            if !ctx.skills.set_level(&name, level)? {
                return Err(Error::not_found(format!("skill '{}'", name)).into());
            }
            log_event(&get_logger(), LogEvent::new("skill_updated").with_command("skills level"));
            report(ctx.skills.get(&name), json, &format!("Set '{}' to {}%", name, level))
        }
    }
}

fn report(skill: Option<&Skill>, json: bool, message: &str) -> Result<()> {
    if json {
        let result = match skill {
            Some(skill) => OperationResult::ok(skill.clone()),
            None => OperationResult::fail("skill not found after update"),
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::success(message);
    }
    Ok(())
}

fn level_bar(level: u8) -> String {
    let filled = usize::from(level) / 5;
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}

fn run_list(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let skills = ctx.skills.list();

    if json {
        println!("{}", serde_json::to_string_pretty(skills)?);
        return Ok(());
    }

    if skills.is_empty() {
        println!("No skills yet.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Skill", "Level", ""]);
    for skill in skills {
        table.add_row(vec![
            skill.name.clone(),
            format!("{}%", skill.level),
            level_bar(skill.level.min(100)),
        ]);
    }
    println!("{}", table);

    Ok(())
}
