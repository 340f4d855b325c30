//! Resume domain model

use serde::{Deserialize, Serialize};

/// Largest resume accepted for upload (5 MiB)
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// The currently published resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeInfo {
    /// Original file name as uploaded (e.g., "resume-2024.pdf")
    pub name: String,
    /// Location of the stored copy
    pub path: String,
    /// Hex SHA-256 of the stored copy, absent for entries written without one
    pub sha256: Option<String>,
}
