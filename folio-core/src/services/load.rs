//! Startup loading shared by the state containers

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ports::KeyValueStorage;

/// Where a container's initial state came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum LoadOutcome {
    /// Parsed from storage
    Stored,
    /// Nothing stored yet; seeded from the default catalog
    Seeded,
    /// Stored data could not be read or parsed; seeded from the default catalog
    Recovered { reason: String },
}

impl LoadOutcome {
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadOutcome::Recovered { .. })
    }
}

/// Read and parse a JSON value from storage.
///
/// Read and parse failures are never surfaced: they come back as `None`
/// together with a `Recovered` outcome so the caller can fall back.
pub(crate) fn load_json<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> (Option<T>, LoadOutcome) {
    match storage.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => (Some(value), LoadOutcome::Stored),
            Err(e) => (
                None,
                LoadOutcome::Recovered {
                    reason: format!("{} could not be parsed: {}", key, e),
                },
            ),
        },
        Ok(None) => (None, LoadOutcome::Seeded),
        Err(e) => (
            None,
            LoadOutcome::Recovered {
                reason: e.to_string(),
            },
        ),
    }
}
