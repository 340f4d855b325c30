//! Resume command - the downloadable resume

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use indicatif::ProgressBar;
use folio_core::LogEvent;

use super::{get_admin_context, get_context, get_logger, log_event};
use crate::output;

#[derive(Subcommand)]
pub enum ResumeCommands {
    /// Show the published resume
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Publish a PDF resume, replacing the current one (admin)
    Upload {
        /// Path to a PDF file (max 5 MB)
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Unpublish the resume (admin)
    Remove,
}

pub fn run(command: ResumeCommands) -> Result<()> {
    match command {
        ResumeCommands::Show { json } => {
            let ctx = get_context()?;
            let current = ctx.resume.current()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&current)?);
                return Ok(());
            }

            match current {
                Some(info) => {
                    println!("{}", info.name.bold());
                    println!("  {} {}", "Stored at:".dimmed(), info.path);
                    if let Some(digest) = info.sha256 {
                        println!("  {} {}", "SHA-256:".dimmed(), digest);
                    }
                }
                None => println!("{}", "No resume published".dimmed()),
            }
            Ok(())
        }
        ResumeCommands::Upload { file, json } => {
            let ctx = get_admin_context()?;
            let logger = get_logger();

            let spinner = (!json).then(|| {
                let pb = ProgressBar::new_spinner();
                pb.set_message(format!("Uploading {}", file.display()));
                pb.enable_steady_tick(Duration::from_millis(100));
                pb
            });
            let result = ctx.resume.upload(&file);
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            let info = match result {
                Ok(info) => info,
                Err(e) => {
                    log_event(
                        &logger,
                        LogEvent::new("resume_upload_failed")
                            .with_command("resume upload")
                            .with_error(e.to_string()),
                    );
                    return Err(e.into());
                }
            };
            log_event(&logger, LogEvent::new("resume_uploaded").with_command("resume upload"));

            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                output::success(&format!("Resume '{}' uploaded successfully.", info.name));
            }
            Ok(())
        }
        ResumeCommands::Remove => {
            let ctx = get_admin_context()?;
            if ctx.resume.remove()? {
                log_event(&get_logger(), LogEvent::new("resume_removed").with_command("resume remove"));
                output::success("Resume removed");
            } else {
                output::info("No resume was published");
            }
            Ok(())
        }
    }
}
