//! Admin gate - remembers whether the site owner has logged in
//!
//! Two states, `Unauthenticated` and `Authenticated`. Only a successful
//! [`AuthGate::login`] enters `Authenticated`; only [`AuthGate::logout`]
//! leaves it. There is no expiry. Only the resulting flag is persisted,
//! never the credentials.

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::ports::storage::ADMIN_AUTHENTICATED_KEY;
use crate::ports::{CredentialVerifier, KeyValueStorage};

/// Stored value meaning "authenticated"; any other value (or none) means not
pub const AUTHENTICATED_MARKER: &str = "true";

pub struct AuthGate {
    storage: Arc<dyn KeyValueStorage>,
    verifier: Box<dyn CredentialVerifier>,
    authenticated: bool,
}

impl AuthGate {
    /// Restore the gate from storage. Absent, malformed or unreadable
    /// data leaves the gate unauthenticated.
    pub fn load(storage: Arc<dyn KeyValueStorage>, verifier: Box<dyn CredentialVerifier>) -> Self {
        let authenticated = matches!(
            storage.get(ADMIN_AUTHENTICATED_KEY),
            Ok(Some(ref marker)) if marker == AUTHENTICATED_MARKER
        );

        Self {
            storage,
            verifier,
            authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Check credentials and, on a match, enter the authenticated state.
    ///
    /// Returns `Ok(false)` on mismatch with the state unchanged. An error is
    /// only returned if the marker could not be written.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        if !self.verifier.verify(username, password) {
            return Ok(false);
        }

        self.storage.set(ADMIN_AUTHENTICATED_KEY, AUTHENTICATED_MARKER)?;
        self.authenticated = true;
        Ok(true)
    }

    /// Leave the authenticated state and forget the persisted marker.
    ///
    /// The in-memory flag is cleared even if the marker cannot be removed.
    pub fn logout(&mut self) -> Result<()> {
        self.authenticated = false;
        self.storage.remove(ADMIN_AUTHENTICATED_KEY)
    }

    /// Fail with `Unauthorized` unless authenticated
    pub fn require(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(Error::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryStorage, StaticCredentials};

    fn gate(storage: &Arc<InMemoryStorage>) -> AuthGate {
        AuthGate::load(storage.clone(), Box::new(StaticCredentials::default()))
    }

    #[test]
    fn test_starts_unauthenticated() {
        let storage = Arc::new(InMemoryStorage::new());
        let gate = gate(&storage);
        assert!(!gate.is_authenticated());
        assert!(matches!(gate.require(), Err(Error::Unauthorized)));
    }

    #[test]
    fn test_login_persists_marker_and_survives_reload() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut first = gate(&storage);

        assert!(first.login("prashant", "223344").unwrap());
        assert!(first.is_authenticated());
        assert_eq!(
            storage.get(ADMIN_AUTHENTICATED_KEY).unwrap().as_deref(),
            Some(AUTHENTICATED_MARKER)
        );

        let reloaded = gate(&storage);
        assert!(reloaded.is_authenticated());
        assert!(reloaded.require().is_ok());
    }

    #[test]
    fn test_wrong_password_keeps_prior_state() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut gate = gate(&storage);

        assert!(!gate.login("prashant", "wrong").unwrap());
        assert!(!gate.is_authenticated());
        assert_eq!(storage.get(ADMIN_AUTHENTICATED_KEY).unwrap(), None);

        assert!(gate.login("prashant", "223344").unwrap());
        assert!(!gate.login("prashant", "wrong").unwrap());
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_login_succeeds_when_already_authenticated() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut gate = gate(&storage);
        assert!(gate.login("prashant", "223344").unwrap());
        assert!(gate.login("prashant", "223344").unwrap());
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_logout_clears_marker() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut gate = gate(&storage);
        gate.login("prashant", "223344").unwrap();

        gate.logout().unwrap();
        assert!(!gate.is_authenticated());
        assert_eq!(storage.get(ADMIN_AUTHENTICATED_KEY).unwrap(), None);
        assert!(!self::gate(&storage).is_authenticated());
    }

    #[test]
    fn test_non_true_marker_is_unauthenticated() {
        for marker in ["false", "TRUE", "1", ""] {
            let storage = Arc::new(InMemoryStorage::with_entries([(ADMIN_AUTHENTICATED_KEY, marker)]));
            assert!(!gate(&storage).is_authenticated(), "marker {:?}", marker);
        }
    }

    #[test]
    fn test_custom_verifier() {
        struct Nobody;
        impl CredentialVerifier for Nobody {
            fn verify(&self, _: &str, _: &str) -> bool {
                false
            }
        }

        let storage = Arc::new(InMemoryStorage::new());
        let mut gate = AuthGate::load(storage, Box::new(Nobody));
        assert!(!gate.login("prashant", "223344").unwrap());
    }
}
