//! Projects command - view and manage showcased projects

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use folio_core::domain::project::DEFAULT_COLOR;
use folio_core::{Error, IconGlyph, LogEvent, Project, ProjectDraft, ProjectIcon};

use super::{get_admin_context, get_context, get_logger, log_event};
use crate::output;

#[derive(Subcommand)]
pub enum ProjectsCommands {
    /// List projects in display order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one project
    Show {
        /// Exact project title
        title: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a new project (admin)
    Add {
        /// Project title (must be unique)
        title: String,
        #[command(flatten)]
        fields: ProjectFields,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit an existing project (admin)
    Edit {
        /// Current project title
        title: String,
        /// New title
        #[arg(long)]
        rename: Option<String>,
        #[command(flatten)]
        fields: ProjectFields,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a project (admin)
    Delete {
        /// Exact project title
        title: String,
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Editable project fields shared by add and edit
#[derive(Args)]
pub struct ProjectFields {
    /// Short description shown on the card
    #[arg(long)]
    description: Option<String>,
    /// Detailed description shown in the project dialog
    #[arg(long)]
    long_description: Option<String>,
    /// Comma-separated technologies, e.g. "Rust, Serde"
    #[arg(long)]
    technologies: Option<String>,
    /// What was learned building it
    #[arg(long)]
    learnings: Option<String>,
    /// Gradient color token, e.g. "from-blue-500 to-cyan-400"
    #[arg(long)]
    color: Option<String>,
    /// Live demo URL
    #[arg(long)]
    demo_url: Option<String>,
    /// Source code URL
    #[arg(long)]
    code_url: Option<String>,
    /// Video embed URL (pass an empty string to remove)
    #[arg(long)]
    video_url: Option<String>,
    /// Card icon: calendar, code, externalLink, arrowRight
    #[arg(long)]
    icon: Option<String>,
}

pub fn run(command: ProjectsCommands) -> Result<()> {
    match command {
        ProjectsCommands::List { json } => run_list(json),
        ProjectsCommands::Show { title, json } => run_show(&title, json),
        ProjectsCommands::Add {
            title,
            fields,
            json,
        } => run_add(title, fields, json),
        ProjectsCommands::Edit {
            title,
            rename,
            fields,
            json,
        } => run_edit(&title, rename, fields, json),
        ProjectsCommands::Delete { title, force, json } => run_delete(&title, force, json),
    }
}

/// JSON view of a project: the persisted fields plus the icon name
fn project_json(project: &Project) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(&project.record)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "icon".to_string(),
            match project.icon {
                Some(icon) => serde_json::Value::String(icon.glyph.to_string()),
                None => serde_json::Value::Null,
            },
        );
    }
    Ok(value)
}

fn run_list(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let projects = ctx.projects.list();

    if json {
        let values = projects
            .iter()
            .map(project_json)
            .collect::<Result<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects yet. Add one with 'folio projects add'.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["#", "Title", "Technologies", "Icon", "Video"]);
    for (i, project) in projects.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            project.title().to_string(),
            project.record.technologies.join(", "),
            project
                .icon
                .map(|icon| icon.glyph.to_string())
                .unwrap_or_else(|| "-".to_string()),
            if project.record.video_url.is_some() { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{}", table);

    Ok(())
}

fn run_show(title: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let Some(project) = ctx.projects.get(title) else {
        return Err(Error::not_found(format!("project '{}'", title)).into());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&project_json(project)?)?);
        return Ok(());
    }

    let record = &project.record;
    println!("{}", record.title.bold());
    println!("{}", record.description);
    println!();
    println!("{}", record.long_description);
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Technologies", &record.technologies.join(", ")]);
    table.add_row(vec!["Learnings", &record.learnings]);
    table.add_row(vec!["Color", &record.color]);
    table.add_row(vec!["Demo", &record.demo_url]);
    table.add_row(vec!["Code", &record.code_url]);
    table.add_row(vec!["Video", record.video_url.as_deref().unwrap_or("-")]);
    if let Some(icon) = project.icon {
        table.add_row(vec!["Icon".to_string(), format!("{} ({})", icon.glyph, icon.tint)]);
    }
    println!("{}", table);

    Ok(())
}

/// Use the flag value, or prompt for it when running interactively
fn value_or_prompt(value: Option<String>, prompt: &str, default: &str) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }
    if atty::isnt(atty::Stream::Stdin) {
        return Ok(default.to_string());
    }

    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if !default.is_empty() {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

fn parse_icon(icon: Option<&str>) -> Result<Option<IconGlyph>> {
    Ok(icon.map(str::parse::<IconGlyph>).transpose()?)
}

/// Build the display project for a validated draft
fn to_project(draft: &ProjectDraft) -> Result<Project> {
    let record = draft.validate()?;
    let icon = draft.icon.map(|glyph| ProjectIcon::new(glyph, "text-blue-500"));
    Ok(Project::new(record, icon))
}

fn run_add(title: String, fields: ProjectFields, json: bool) -> Result<()> {
    let mut ctx = get_admin_context()?;
    let logger = get_logger();

    let draft = ProjectDraft {
        title,
        icon: parse_icon(fields.icon.as_deref())?,
        description: value_or_prompt(fields.description, "Short description", "")?,
        long_description: value_or_prompt(fields.long_description, "Detailed description", "")?,
        technologies: value_or_prompt(fields.technologies, "Technologies (comma-separated)", "")?,
        learnings: value_or_prompt(fields.learnings, "Key learnings", "")?,
        color: value_or_prompt(fields.color, "Color scheme", DEFAULT_COLOR)?,
        demo_url: value_or_prompt(fields.demo_url, "Demo URL", "https://")?,
        code_url: value_or_prompt(fields.code_url, "Code URL", "https://github.com/")?,
        video_url: value_or_prompt(fields.video_url, "Video URL (optional)", "")?,
    };

    let project = to_project(&draft)?;
    let title = project.title().to_string();
    ctx.projects.add(project)?;
    log_event(&logger, LogEvent::new("project_added").with_command("projects add"));

    if json {
        let added = ctx.projects.get(&title).map(project_json).transpose()?;
        println!("{}", serde_json::to_string_pretty(&added)?);
    } else {
        output::success(&format!("Project '{}' has been created successfully.", title));
    }

    Ok(())
}

fn run_edit(title: &str, rename: Option<String>, fields: ProjectFields, json: bool) -> Result<()> {
    let mut ctx = get_admin_context()?;
    let logger = get_logger();

    let Some(existing) = ctx.projects.get(title) else {
        return Err(Error::not_found(format!("project '{}'", title)).into());
    };

    let mut draft = ProjectDraft::from_project(existing);
    if let Some(new_title) = rename {
        draft.title = new_title;
    }
    if let Some(icon) = parse_icon(fields.icon.as_deref())? {
        draft.icon = Some(icon);
    }
    let overrides = [
        (&mut draft.description, fields.description),
        (&mut draft.long_description, fields.long_description),
        (&mut draft.technologies, fields.technologies),
        (&mut draft.learnings, fields.learnings),
        (&mut draft.color, fields.color),
        (&mut draft.demo_url, fields.demo_url),
        (&mut draft.code_url, fields.code_url),
        (&mut draft.video_url, fields.video_url),
    ];
    for (slot, value) in overrides {
        if let Some(v) = value {
            *slot = v;
        }
    }

    let mut project = to_project(&draft)?;
    if project.title() == title && draft.icon == existing.icon.map(|i| i.glyph) {
        project.icon = existing.icon;
    }
    let new_title = project.title().to_string();

    ctx.projects.update(title, project)?;
    log_event(&logger, LogEvent::new("project_updated").with_command("projects edit"));

    if json {
        let updated = ctx.projects.get(&new_title).map(project_json).transpose()?;
        println!("{}", serde_json::to_string_pretty(&updated)?);
    } else {
        output::success(&format!("Project '{}' has been updated successfully.", new_title));
    }

    Ok(())
}

fn run_delete(title: &str, force: bool, json: bool) -> Result<()> {
    let mut ctx = get_admin_context()?;
    let logger = get_logger();

    if ctx.projects.get(title).is_none() {
        return Err(Error::not_found(format!("project '{}'", title)).into());
    }

    if !force && !json {
        println!(
            "\n{}",
            format!("This will permanently delete the project \"{}\".", title).yellow()
        );
        if !Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?
        {
            println!("{}\n", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let deleted = ctx.projects.delete(title)?;
    log_event(&logger, LogEvent::new("project_deleted").with_command("projects delete"));

    if json {
        println!("{}", serde_json::json!({ "deleted": deleted, "remaining": ctx.projects.len() }));
    } else {
        output::success(&format!("Project \"{}\" has been deleted successfully.", title));
    }

    Ok(())
}
