//! Project store - the authoritative project list, mirrored to storage
//!
//! The list is loaded once at startup and written back in full after every
//! mutation. Icons are never written: they are stripped on save and
//! re-attached on load by matching titles against the default catalog.

use std::sync::Arc;

use crate::adapters::catalog;
use crate::domain::result::{Error, Result};
use crate::domain::{Project, ProjectRecord};
use crate::ports::storage::PROJECTS_KEY;
use crate::ports::KeyValueStorage;

use super::load::{load_json, LoadOutcome};

/// Ordered list of projects addressed by title
pub struct ProjectStore {
    storage: Arc<dyn KeyValueStorage>,
    projects: Vec<Project>,
    outcome: LoadOutcome,
}

impl ProjectStore {
    /// Load the project list from storage.
    ///
    /// A missing key or unreadable data falls back to the default catalog
    /// (with its icons). The fallback is not written back.
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let (stored, outcome) = load_json::<Vec<ProjectRecord>>(storage.as_ref(), PROJECTS_KEY);

        let projects = match stored {
            Some(records) => records
                .into_iter()
                .map(|record| {
                    let icon = catalog::icon_for(&record.title);
                    Project::new(record, icon)
                })
                .collect(),
            None => catalog::default_projects(),
        };

        Self {
            storage,
            projects,
            outcome,
        }
    }

    /// How the initial list was obtained
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    /// All projects in display order
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Find a project by exact, case-sensitive title
    pub fn get(&self, title: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.title() == title)
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.title() == title)
    }

    /// Append a project and persist.
    ///
    /// Fails with `Conflict` if a project with the same title exists.
    pub fn add(&mut self, project: Project) -> Result<()> {
        if self.get(project.title()).is_some() {
            return Err(Error::conflict(format!(
                "a project titled '{}' already exists",
                project.title()
            )));
        }

        let mut next = self.projects.clone();
        next.push(project);
        self.commit(next)
    }

    /// Replace the project titled `title` in place and persist.
    ///
    /// The replacement may carry a different title (rename), as long as it
    /// does not collide with another project. Returns `Ok(false)` and leaves
    /// the list untouched when no project has that title.
    pub fn update(&mut self, title: &str, project: Project) -> Result<bool> {
        let Some(index) = self.position(title) else {
            return Ok(false);
        };

        if project.title() != title && self.get(project.title()).is_some() {
            return Err(Error::conflict(format!(
                "cannot rename '{}' to '{}': that title is already taken",
                title,
                project.title()
            )));
        }

        let mut next = self.projects.clone();
        next[index] = project;
        self.commit(next)?;
        Ok(true)
    }

    /// Remove the project titled `title` and persist.
    ///
    /// Returns `Ok(false)` when no project has that title. Removing the
    /// last project persists an empty list.
    pub fn delete(&mut self, title: &str) -> Result<bool> {
        let Some(index) = self.position(title) else {
            return Ok(false);
        };

        let mut next = self.projects.clone();
        next.remove(index);
        self.commit(next)?;
        Ok(true)
    }

    /// Persist `next`, then make it the current list
    fn commit(&mut self, next: Vec<Project>) -> Result<()> {
        let records: Vec<&ProjectRecord> = next.iter().map(|p| &p.record).collect();
        let json = serde_json::to_string(&records)?;
        self.storage.set(PROJECTS_KEY, &json)?;
        self.projects = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStorage;
    use crate::domain::{IconGlyph, ProjectIcon};

    fn record(title: &str) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            description: format!("{} in one line", title),
            long_description: format!("{} in a paragraph", title),
            technologies: vec!["Rust".to_string(), "Serde".to_string()],
            learnings: "Ownership".to_string(),
            color: "from-green-500 to-emerald-400".to_string(),
            demo_url: "https://example.com/demo".to_string(),
            code_url: "https://example.com/code".to_string(),
            video_url: None,
        }
    }

    fn empty_store() -> (Arc<InMemoryStorage>, ProjectStore) {
        let storage = Arc::new(InMemoryStorage::with_entries([(PROJECTS_KEY, "[]")]));
        let store = ProjectStore::load(storage.clone());
        (storage, store)
    }

    fn stored_titles(storage: &InMemoryStorage) -> Vec<String> {
        let raw = storage.get(PROJECTS_KEY).unwrap().unwrap();
        let records: Vec<ProjectRecord> = serde_json::from_str(&raw).unwrap();
        records.into_iter().map(|r| r.title).collect()
    }

    #[test]
    fn test_first_load_seeds_catalog_without_writing() {
        let storage = Arc::new(InMemoryStorage::new());
        let store = ProjectStore::load(storage.clone());

        assert_eq!(store.len(), 5);
        assert_eq!(store.list()[0].title(), "Task Management System");
        assert!(store.list().iter().all(|p| p.icon.is_some()));
        assert_eq!(store.load_outcome(), &LoadOutcome::Seeded);
        assert_eq!(storage.get(PROJECTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_unparsable_storage_falls_back_to_catalog() {
        let storage = Arc::new(InMemoryStorage::with_entries([(PROJECTS_KEY, "{oops")]));
        let store = ProjectStore::load(storage.clone());

        assert_eq!(store.len(), 5);
        assert!(store.load_outcome().is_recovered());
        assert_eq!(storage.get(PROJECTS_KEY).unwrap().as_deref(), Some("{oops"));
    }

    #[test]
    fn test_unknown_title_loads_without_icon() {
        let json = serde_json::to_string(&vec![record("X")]).unwrap();
        let storage = Arc::new(InMemoryStorage::with_entries([(PROJECTS_KEY, json)]));
        let store = ProjectStore::load(storage);

        assert_eq!(store.len(), 1);
        let project = store.get("X").unwrap();
        assert_eq!(project.icon, None);
        assert_eq!(project.record, record("X"));
    }

    #[test]
    fn test_known_title_gets_catalog_icon_back() {
        let json = serde_json::to_string(&vec![record("E-Commerce Frontend")]).unwrap();
        let storage = Arc::new(InMemoryStorage::with_entries([(PROJECTS_KEY, json)]));
        let store = ProjectStore::load(storage);

        let icon = store.get("E-Commerce Frontend").unwrap().icon.unwrap();
        assert_eq!(icon.glyph, IconGlyph::ExternalLink);
    }

    #[test]
    fn test_add_appends_and_persists_without_icon() {
        let (storage, mut store) = empty_store();
        store.add(Project::from(record("A"))).unwrap();
        let with_icon = Project::new(record("B"), Some(ProjectIcon::new(IconGlyph::Code, "text-blue-500")));
        store.add(with_icon).unwrap();

        assert_eq!(store.list().last().unwrap().title(), "B");
        assert_eq!(stored_titles(&storage), vec!["A", "B"]);
        let raw = storage.get(PROJECTS_KEY).unwrap().unwrap();
        assert!(!raw.contains("icon"));
    }

    #[test]
    fn test_add_rejects_duplicate_title() {
        let (storage, mut store) = empty_store();
        store.add(Project::from(record("A"))).unwrap();

        let result = store.add(Project::from(record("A")));
        assert!(matches!(result, Err(Error::Conflict(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(stored_titles(&storage), vec!["A"]);
    }

    #[test]
    fn test_update_in_place_with_rename() {
        let (storage, mut store) = empty_store();
        for title in ["A", "B", "C"] {
            store.add(Project::from(record(title))).unwrap();
        }

        let mut renamed = record("B2");
        renamed.learnings = "Lifetimes".to_string();
        assert!(store.update("B", Project::from(renamed.clone())).unwrap());

        assert!(store.get("B").is_none());
        assert_eq!(store.get("B2").unwrap().record, renamed);
        assert_eq!(store.list()[1].title(), "B2");
        assert_eq!(stored_titles(&storage), vec!["A", "B2", "C"]);
    }

    #[test]
    fn test_update_rejects_rename_onto_existing_title() {
        let (_, mut store) = empty_store();
        store.add(Project::from(record("A"))).unwrap();
        store.add(Project::from(record("B"))).unwrap();

        let result = store.update("A", Project::from(record("B")));
        assert!(matches!(result, Err(Error::Conflict(_))));
        assert_eq!(store.list()[0].title(), "A");
    }

    #[test]
    fn test_update_and_delete_missing_are_noops() {
        let (storage, mut store) = empty_store();
        store.add(Project::from(record("A"))).unwrap();
        let before = storage.get(PROJECTS_KEY).unwrap();

        assert!(!store.update("missing", Project::from(record("Z"))).unwrap());
        assert!(!store.delete("missing").unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(storage.get(PROJECTS_KEY).unwrap(), before);
    }

    #[test]
    fn test_delete_removes_one() {
        let (_, mut store) = empty_store();
        store.add(Project::from(record("A"))).unwrap();
        store.add(Project::from(record("B"))).unwrap();

        assert!(store.delete("A").unwrap());
        assert!(store.get("A").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_deleting_last_project_persists_empty_list() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut store = ProjectStore::load(storage.clone());

        let titles: Vec<String> = store.list().iter().map(|p| p.title().to_string()).collect();
        for title in &titles {
            assert!(store.delete(title).unwrap());
        }
        assert!(store.is_empty());
        assert_eq!(storage.get(PROJECTS_KEY).unwrap().as_deref(), Some("[]"));

        // An emptied list stays empty; it does not come back as the catalog
        let reloaded = ProjectStore::load(storage);
        assert!(reloaded.is_empty());
        assert_eq!(reloaded.load_outcome(), &LoadOutcome::Stored);
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let storage = Arc::new(InMemoryStorage::new());
        let store = ProjectStore::load(storage);
        assert!(store.get("React Portfolio Website").is_some());
        assert!(store.get("react portfolio website").is_none());
    }
}
