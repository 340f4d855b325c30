//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - JSON file on disk for the KeyValueStorage port
//! - In-process map for the KeyValueStorage port (tests, ephemeral use)
//! - Compiled-in credential pair for the CredentialVerifier port
//! - Static seed data (default catalog) for first runs and icon lookup

pub mod catalog;
pub mod credentials;
pub mod file;
pub mod memory;

pub use credentials::StaticCredentials;
pub use file::JsonFileStorage;
pub use memory::InMemoryStorage;
