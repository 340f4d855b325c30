//! Service layer - the state containers
//!
//! Each service owns one piece of site content, loads it once from the
//! storage port and writes it back after every mutation.

mod auth;
mod load;
pub mod logging;
mod profile;
mod projects;
pub mod resume;
mod skills;

pub use auth::{AuthGate, AUTHENTICATED_MARKER};
pub use load::LoadOutcome;
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use profile::ProfileService;
pub use projects::ProjectStore;
pub use resume::ResumeService;
pub use skills::SkillService;
