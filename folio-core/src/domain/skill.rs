//! Skill domain model

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Highest proficiency level a skill can carry
pub const MAX_LEVEL: u8 = 100;

/// Proficiency level given to new skills when none is specified
pub const DEFAULT_LEVEL: u8 = 75;

/// A skill shown on the skills section with its proficiency (0-100)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    /// Create a validated skill
    pub fn new(name: impl Into<String>, level: u8) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::validation("skill name cannot be empty"));
        }
        check_level(level)?;
        Ok(Self { name, level })
    }

    /// Case-insensitive name comparison, as used for duplicate detection
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

pub(crate) fn check_level(level: u8) -> Result<()> {
    if level > MAX_LEVEL {
        return Err(Error::validation(format!(
            "skill level must be between 0 and {}, got {}",
            MAX_LEVEL, level
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_validation() {
        assert!(Skill::new("Rust", 90).is_ok());
        assert!(Skill::new("   ", 50).is_err());
        assert!(Skill::new("Rust", 101).is_err());
        assert_eq!(Skill::new(" Rust ", 0).unwrap().name, "Rust");
    }

    #[test]
    fn test_is_named_ignores_case() {
        let skill = Skill::new("TypeScript", 85).unwrap();
        assert!(skill.is_named("typescript"));
        assert!(skill.is_named(" TYPESCRIPT "));
        assert!(!skill.is_named("JavaScript"));
    }
}
