//! Skill service - the skills section's list of proficiencies

use std::sync::Arc;

use crate::adapters::catalog;
use crate::domain::result::{Error, Result};
use crate::domain::skill::check_level;
use crate::domain::Skill;
use crate::ports::storage::SKILLS_KEY;
use crate::ports::KeyValueStorage;

use super::load::{load_json, LoadOutcome};

pub struct SkillService {
    storage: Arc<dyn KeyValueStorage>,
    skills: Vec<Skill>,
    outcome: LoadOutcome,
}

impl SkillService {
    /// Load skills from storage, falling back to the default skills
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let (stored, outcome) = load_json::<Vec<Skill>>(storage.as_ref(), SKILLS_KEY);
        let skills = stored.unwrap_or_else(catalog::default_skills);
        Self {
            storage,
            skills,
            outcome,
        }
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn list(&self) -> &[Skill] {
        &self.skills
    }

    /// Find a skill by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.is_named(name))
    }

    /// Append a skill. Names are unique ignoring case.
    pub fn add(&mut self, name: &str, level: u8) -> Result<()> {
        let skill = Skill::new(name, level)?;
        if self.get(&skill.name).is_some() {
            return Err(Error::conflict(format!("skill '{}' already exists", skill.name)));
        }

        let mut next = self.skills.clone();
        next.push(skill);
        self.commit(next)
    }

    /// Remove a skill by name; `Ok(false)` if there was none
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let Some(index) = self.skills.iter().position(|s| s.is_named(name)) else {
            return Ok(false);
        };

        let mut next = self.skills.clone();
        next.remove(index);
        self.commit(next)?;
        Ok(true)
    }

    /// Change a skill's level; `Ok(false)` if there is no such skill
    pub fn set_level(&mut self, name: &str, level: u8) -> Result<bool> {
        check_level(level)?;
        let Some(index) = self.skills.iter().position(|s| s.is_named(name)) else {
            return Ok(false);
        };

        let mut next = self.skills.clone();
        next[index].level = level;
        self.commit(next)?;
        Ok(true)
    }

    fn commit(&mut self, next: Vec<Skill>) -> Result<()> {
        let json = serde_json::to_string(&next)?;
        self.storage.set(SKILLS_KEY, &json)?;
        self.skills = next;
        Ok(())
    }
}
