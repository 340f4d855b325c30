//! Core domain entities
//!
//! All entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod profile;
pub mod project;
mod resume;
pub mod result;
pub mod skill;

pub use profile::{Profile, ProfileUpdate};
pub use project::{IconGlyph, Project, ProjectDraft, ProjectIcon, ProjectRecord};
pub use resume::{ResumeInfo, MAX_RESUME_BYTES};
pub use skill::Skill;
