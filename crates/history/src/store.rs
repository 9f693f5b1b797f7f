use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kreator_core::{DomainError, DomainResult, ProjectId};
use kreator_session::ConfigSnapshot;

/// One saved project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub configuration: ConfigSnapshot,
}

/// Storage seam for saved projects.
///
/// Timestamps are passed in rather than read from a clock so implementations
/// stay deterministic under test.
pub trait ProjectStore {
    /// Persist a snapshot under a display name; returns the stored record.
    fn save(
        &mut self,
        name: &str,
        configuration: ConfigSnapshot,
        saved_at: DateTime<Utc>,
    ) -> ProjectRecord;

    /// Fetch a saved configuration by id.
    fn load(&self, id: ProjectId) -> DomainResult<&ProjectRecord>;

    /// Change a saved project's display name.
    fn rename(&mut self, id: ProjectId, name: &str) -> DomainResult<()>;

    /// Remove a saved project by id.
    fn delete(&mut self, id: ProjectId) -> DomainResult<()>;

    /// All saved projects, newest first.
    fn list(&self) -> &[ProjectRecord];

    /// At most `limit` most recently saved projects, newest first.
    fn recent(&self, limit: usize) -> &[ProjectRecord] {
        let list = self.list();
        &list[..limit.min(list.len())]
    }
}

/// In-memory project store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    projects: Vec<ProjectRecord>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the whole store for external persistence.
    pub fn export_json(&self) -> DomainResult<String> {
        serde_json::to_string(&self.projects)
            .map_err(|e| DomainError::validation(format!("project history export: {e}")))
    }

    /// Replace the store's contents from a previous export.
    pub fn import_json(&mut self, json: &str) -> DomainResult<()> {
        self.projects = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("project history import: {e}")))?;
        Ok(())
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn save(
        &mut self,
        name: &str,
        configuration: ConfigSnapshot,
        saved_at: DateTime<Utc>,
    ) -> ProjectRecord {
        let record = ProjectRecord {
            id: ProjectId::new(),
            name: name.to_string(),
            saved_at,
            configuration,
        };
        // Newest first, matching the storefront's history panel.
        self.projects.insert(0, record.clone());
        record
    }

    fn load(&self, id: ProjectId) -> DomainResult<&ProjectRecord> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound)
    }

    fn rename(&mut self, id: ProjectId, name: &str) -> DomainResult<()> {
        let record = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;
        record.name = name.to_string();
        Ok(())
    }

    fn delete(&mut self, id: ProjectId) -> DomainResult<()> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    fn list(&self) -> &[ProjectRecord] {
        &self.projects
    }
}
