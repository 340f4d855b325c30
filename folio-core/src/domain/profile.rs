//! Profile domain model

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Personal details displayed on the about and contact sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub location: String,
    pub phone: String,
    pub bio: String,
}

/// Partial profile update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.location.is_none()
            && self.phone.is_none()
            && self.bio.is_none()
    }
}

impl Profile {
    /// Apply an update, returning the new profile if it is valid
    pub fn apply(&self, update: ProfileUpdate) -> Result<Profile> {
        let mut next = self.clone();
        if let Some(name) = update.name {
            next.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            next.email = email.trim().to_string();
        }
        if let Some(location) = update.location {
            next.location = location.trim().to_string();
        }
        if let Some(phone) = update.phone {
            next.phone = phone.trim().to_string();
        }
        if let Some(bio) = update.bio {
            next.bio = bio.trim().to_string();
        }
        next.validate()?;
        Ok(next)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::validation("name cannot be empty"));
        }
        if !self.email.contains('@') {
            return Err(Error::validation(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            location: "London".to_string(),
            phone: "+44 20 0000 0000".to_string(),
            bio: "Analyst".to_string(),
        }
    }

    #[test]
    fn test_apply_partial_update() {
        let updated = profile()
            .apply(ProfileUpdate {
                location: Some(" Paris ".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.location, "Paris");
        assert_eq!(updated.name, "Ada");
    }

    #[test]
    fn test_apply_rejects_bad_email() {
        let result = profile().apply(ProfileUpdate {
            email: Some("nope".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
