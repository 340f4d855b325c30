//! Folio CLI - manage portfolio site content from the terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{auth, logs, profile, projects, resume, skills};

/// Folio - portfolio content in your terminal
#[derive(Parser)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in as the site admin
    Login {
        /// Username (or FOLIO_USERNAME)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (or FOLIO_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log out of the admin session
    Logout {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show whether the admin is logged in
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage projects
    Projects {
        #[command(subcommand)]
        command: projects::ProjectsCommands,
    },

    /// View and manage skills
    Skills {
        #[command(subcommand)]
        command: skills::SkillsCommands,
    },

    /// View and edit the profile
    Profile {
        #[command(subcommand)]
        command: profile::ProfileCommands,
    },

    /// View and manage the published resume
    Resume {
        #[command(subcommand)]
        command: resume::ResumeCommands,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

impl Commands {
    /// Name recorded in the event log
    fn name(&self) -> &'static str {
        match self {
            Commands::Login { .. } => "login",
            Commands::Logout { .. } => "logout",
            Commands::Whoami { .. } => "whoami",
            Commands::Projects { .. } => "projects",
            Commands::Skills { .. } => "skills",
            Commands::Profile { .. } => "profile",
            Commands::Resume { .. } => "resume",
            Commands::Logs { .. } => "logs",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(logger) = commands::get_logger() {
        let _ = logger.log_command(cli.command.name());
    }

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let details = format!("{:#}", e);
            if let Some(logger) = commands::get_logger() {
                let _ = logger.log_error("command_failed", &e.to_string(), Some(&details));
            }
            output::error(&details);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login {
            username,
            password,
            json,
        } => auth::run_login(username, password, json),
        Commands::Logout { json } => auth::run_logout(json),
        Commands::Whoami { json } => auth::run_whoami(json),
        Commands::Projects { command } => projects::run(command),
        Commands::Skills { command } => skills::run(command),
        Commands::Profile { command } => profile::run(command),
        Commands::Resume { command } => resume::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
