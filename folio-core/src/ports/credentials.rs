//! Credentials port - identity verification abstraction

/// Verifies a username/password pair
///
/// The admin gate only needs a yes/no answer; how the answer is reached
/// (a constant pair, a password file, an identity provider) is up to the
/// adapter.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}
