//! CLI command implementations

pub mod auth;
pub mod logs;
pub mod profile;
pub mod projects;
pub mod resume;
pub mod skills;

use std::path::PathBuf;

use anyhow::{Context, Result};
use folio_core::config::Config;
use folio_core::{EntryPoint, FolioContext, LogEvent, LoggingService};

/// Get the logging service for CLI operations
///
/// Returns None if logging is disabled or fails to initialize (shouldn't
/// block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir();
    let config = Config::load(&data_dir).ok()?;
    if !config.logging {
        return None;
    }
    LoggingService::new(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the data directory from environment or default
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FOLIO_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio")
    }
}

/// Build the context for this invocation
///
/// Stored data that had to be replaced by defaults is reported as a warning
/// and logged; it never fails the command.
pub fn get_context() -> Result<FolioContext> {
    let data_dir = get_data_dir();

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    let ctx = FolioContext::new(&data_dir).context("Failed to initialize folio context")?;

    let fallbacks = ctx.load_fallbacks();
    if !fallbacks.is_empty() {
        let logger = get_logger();
        for (container, reason) in fallbacks {
            crate::output::warning(&format!(
                "Stored {} could not be read, showing defaults ({})",
                container, reason
            ));
            log_event(
                &logger,
                LogEvent::new(format!("{}_load_fallback", container)).with_error(reason),
            );
        }
    }

    Ok(ctx)
}

/// Build the context and fail unless the admin is logged in
pub fn get_admin_context() -> Result<FolioContext> {
    let ctx = get_context()?;
    ctx.auth.require()?;
    Ok(ctx)
}
