//! Folio Core - state containers for a single-page portfolio site
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core entities (Project, Skill, Profile, ResumeInfo)
//! - **ports**: Trait definitions for external dependencies (KeyValueStorage, CredentialVerifier)
//! - **services**: The state containers (ProjectStore, AuthGate, ...)
//! - **adapters**: Concrete implementations (JSON file storage, static credentials, default catalog)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use adapters::{JsonFileStorage, StaticCredentials};
use config::Config;
use ports::KeyValueStorage;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{
    IconGlyph, Profile, ProfileUpdate, Project, ProjectDraft, ProjectIcon, ProjectRecord,
    ResumeInfo, Skill,
};
pub use services::{EntryPoint, LoadOutcome, LogEvent, LoggingService};

/// Main context for Folio operations
///
/// Constructed once per process and handed to whatever needs site content.
/// All containers share one storage handle.
pub struct FolioContext {
    pub config: Config,
    pub data_dir: PathBuf,
    pub storage: Arc<dyn KeyValueStorage>,
    pub projects: ProjectStore,
    pub auth: AuthGate,
    pub skills: SkillService,
    pub profile: ProfileService,
    pub resume: ResumeService,
}

impl FolioContext {
    /// Create a context backed by the JSON storage file in `data_dir`
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let storage: Arc<dyn KeyValueStorage> =
            Arc::new(JsonFileStorage::new(config.storage_path(data_dir)));
        Ok(Self::with_storage(config, data_dir, storage))
    }

    /// Create a context over an explicit storage backend
    pub fn with_storage(config: Config, data_dir: &Path, storage: Arc<dyn KeyValueStorage>) -> Self {
        let projects = ProjectStore::load(Arc::clone(&storage));
        let auth = AuthGate::load(Arc::clone(&storage), Box::new(StaticCredentials::default()));
        let skills = SkillService::load(Arc::clone(&storage));
        let profile = ProfileService::load(Arc::clone(&storage));
        let resume = ResumeService::new(Arc::clone(&storage), data_dir);

        Self {
            config,
            data_dir: data_dir.to_path_buf(),
            storage,
            projects,
            auth,
            skills,
            profile,
            resume,
        }
    }

    /// Containers whose stored data had to be replaced by defaults at load,
    /// with the reason
    pub fn load_fallbacks(&self) -> Vec<(&'static str, String)> {
        [
            ("projects", self.projects.load_outcome()),
            ("skills", self.skills.load_outcome()),
            ("profile", self.profile.load_outcome()),
        ]
        .into_iter()
        .filter_map(|(name, outcome)| match outcome {
            LoadOutcome::Recovered { reason } => Some((name, reason.clone())),
            _ => None,
        })
        .collect()
    }
}
