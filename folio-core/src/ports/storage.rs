//! Storage port - durable key-value storage abstraction
//!
//! Mirrors the semantics of browser local storage: string keys, string
//! values, every write replaces the whole value.

use crate::domain::result::Result;

/// Key holding the JSON array of persisted project records
pub const PROJECTS_KEY: &str = "portfolio_projects";
/// Key holding the admin marker; `"true"` when authenticated, absent otherwise
pub const ADMIN_AUTHENTICATED_KEY: &str = "admin_authenticated";
/// Key holding the JSON array of skills
pub const SKILLS_KEY: &str = "portfolio_skills";
/// Key holding the JSON profile object
pub const PROFILE_KEY: &str = "portfolio_profile";
/// Keys describing the published resume
pub const RESUME_NAME_KEY: &str = "resume_name";
pub const RESUME_PATH_KEY: &str = "resume_path";
pub const RESUME_SHA256_KEY: &str = "resume_sha256";

/// Durable key-value storage
///
/// Implementations (adapters) decide where values live. A missing key is
/// `Ok(None)`, never an error; errors are reserved for the medium itself
/// failing (unreadable file, lock failure, ...).
pub trait KeyValueStorage: Send + Sync {
    /// Get the value for a key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a key, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// List all keys currently present, sorted
    fn keys(&self) -> Result<Vec<String>>;
}
