//! Credential adapters

use crate::ports::CredentialVerifier;

/// Username of the built-in admin account
pub const ADMIN_USERNAME: &str = "prashant";
/// Password of the built-in admin account
pub const ADMIN_PASSWORD: &str = "223344";

/// A single fixed username/password pair compiled into the binary.
///
/// Not a security boundary: it only keeps casual visitors out of the
/// admin commands.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: &'static str,
    password: &'static str,
}

impl StaticCredentials {
    pub const fn new(username: &'static str, password: &'static str) -> Self {
        Self { username, password }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(ADMIN_USERNAME, ADMIN_PASSWORD)
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let creds = StaticCredentials::default();
        assert!(creds.verify("prashant", "223344"));
        assert!(!creds.verify("prashant", "wrong"));
        assert!(!creds.verify("Prashant", "223344"));
        assert!(!creds.verify("prashant ", "223344"));
        assert!(!creds.verify("", ""));
    }
}
