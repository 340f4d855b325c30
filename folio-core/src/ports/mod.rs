//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The services
//! depend only on these traits, not on concrete implementations.

mod credentials;
pub mod storage;

pub use credentials::CredentialVerifier;
pub use storage::KeyValueStorage;
