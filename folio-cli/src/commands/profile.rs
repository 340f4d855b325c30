//! Profile command - the about and contact details

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use folio_core::{LogEvent, OperationResult, Profile, ProfileUpdate};

use super::{get_admin_context, get_context, get_logger, log_event};
use crate::output;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update profile fields (admin)
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Restore the default profile (admin)
    Reset {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: ProfileCommands) -> Result<()> {
    match command {
        ProfileCommands::Show { json } => {
            let ctx = get_context()?;
            let profile = ctx.profile.get();
            if json {
                println!("{}", serde_json::to_string_pretty(profile)?);
                return Ok(());
            }

            println!("{}", profile.name.bold());
            println!("  {} {}", "Email:".dimmed(), profile.email);
            println!("  {} {}", "Phone:".dimmed(), profile.phone);
            println!("  {} {}", "Location:".dimmed(), profile.location);
            println!();
            println!("{}", profile.bio);
            Ok(())
        }
        ProfileCommands::Set {
            name,
            email,
            location,
            phone,
            bio,
            json,
        } => {
            let update = ProfileUpdate {
                name,
                email,
                location,
                phone,
                bio,
            };
            if update.is_empty() {
                anyhow::bail!("Nothing to update. Pass at least one of --name, --email, --location, --phone, --bio");
            }

            let mut ctx = get_admin_context()?;
            let profile = ctx.profile.update(update)?.clone();
            log_event(&get_logger(), LogEvent::new("profile_updated").with_command("profile set"));
            report(profile, json, "Profile updated")
        }
        ProfileCommands::Reset { json } => {
            let mut ctx = get_admin_context()?;
            ctx.profile.reset()?;
            log_event(&get_logger(), LogEvent::new("profile_reset").with_command("profile reset"));
            report(ctx.profile.get().clone(), json, "Profile restored to defaults")
        }
    }
}

fn report(profile: Profile, json: bool, message: &str) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(profile))?);
    } else {
        output::success(message);
    }
    Ok(())
}
