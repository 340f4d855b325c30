//! Login/Logout commands - the admin gate

use std::env;

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};
use folio_core::LogEvent;

use super::{get_context, get_logger, log_event};

/// Get a credential from the flag, an environment variable, or a prompt
fn get_or_prompt(flag: Option<String>, env_var: &str, prompt: &str, secret: bool) -> Result<String> {
    if let Some(value) = flag {
        return Ok(value);
    }

    if let Ok(value) = env::var(env_var) {
        return Ok(value);
    }

    if atty::isnt(atty::Stream::Stdin) {
        anyhow::bail!("{} is required (pass it as a flag or set {})", prompt, env_var);
    }

    let value = if secret {
        Password::new().with_prompt(prompt).interact()?
    } else {
        Input::<String>::new().with_prompt(prompt).interact_text()?
    };
    Ok(value)
}

pub fn run_login(username: Option<String>, password: Option<String>, json: bool) -> Result<()> {
    let mut ctx = get_context()?;
    let logger = get_logger();

    let username = get_or_prompt(username, "FOLIO_USERNAME", "Username", false)?;
    let password = get_or_prompt(password, "FOLIO_PASSWORD", "Password", true)?;

    let success = ctx.auth.login(&username, &password)?;

    if success {
        log_event(&logger, LogEvent::new("login_succeeded").with_command("login"));
    } else {
        log_event(
            &logger,
            LogEvent::new("login_failed")
                .with_command("login")
                .with_error("Invalid credentials"),
        );
    }

    if json {
        println!("{}", serde_json::json!({ "authenticated": success }));
        if !success {
            std::process::exit(1);
        }
        return Ok(());
    }

    if success {
        println!("{} Logged in. Admin commands are now available.", "✓".green());
        Ok(())
    } else {
        anyhow::bail!("Invalid credentials. Please try again.")
    }
}

pub fn run_logout(json: bool) -> Result<()> {
    let mut ctx = get_context()?;
    let was_authenticated = ctx.auth.is_authenticated();
    ctx.auth.logout()?;

    log_event(&get_logger(), LogEvent::new("logout").with_command("logout"));

    if json {
        println!("{}", serde_json::json!({ "authenticated": false }));
    } else if was_authenticated {
        println!("{} Logged out.", "✓".green());
    } else {
        println!("{}", "Not logged in.".dimmed());
    }

    Ok(())
}

pub fn run_whoami(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let authenticated = ctx.auth.is_authenticated();

    if json {
        println!("{}", serde_json::json!({ "authenticated": authenticated }));
    } else if authenticated {
        println!("{}", "Logged in as admin".green());
    } else {
        println!("{}", "Not logged in".yellow());
    }

    Ok(())
}
