//! Profile service - owner details for the about and contact sections

use std::sync::Arc;

use crate::adapters::catalog;
use crate::domain::result::Result;
use crate::domain::{Profile, ProfileUpdate};
use crate::ports::storage::PROFILE_KEY;
use crate::ports::KeyValueStorage;

use super::load::{load_json, LoadOutcome};

pub struct ProfileService {
    storage: Arc<dyn KeyValueStorage>,
    profile: Profile,
    outcome: LoadOutcome,
}

impl ProfileService {
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let (stored, outcome) = load_json::<Profile>(storage.as_ref(), PROFILE_KEY);
        let profile = stored.unwrap_or_else(catalog::default_profile);
        Self {
            storage,
            profile,
            outcome,
        }
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn get(&self) -> &Profile {
        &self.profile
    }

    /// Apply a partial update and persist the whole profile
    pub fn update(&mut self, update: ProfileUpdate) -> Result<&Profile> {
        let next = self.profile.apply(update)?;
        let json = serde_json::to_string(&next)?;
        self.storage.set(PROFILE_KEY, &json)?;
        self.profile = next;
        Ok(&self.profile)
    }

    /// Forget the stored profile and return to the default one
    pub fn reset(&mut self) -> Result<()> {
        self.storage.remove(PROFILE_KEY)?;
        self.profile = catalog::default_profile();
        Ok(())
    }
}
