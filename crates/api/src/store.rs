//! In-memory project storage.

use dashmap::DashMap;
use rab_core::budget::Project;
use rab_shared::types::ProjectId;

/// Concurrent map of saved projects.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: DashMap<ProjectId, Project>,
}

impl ProjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a project, replacing any project with the same id.
    pub fn insert(&self, project: Project) {
        self.projects.insert(project.id, project);
    }

    /// Returns a copy of a project.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.projects.get(&id).map(|p| p.value().clone())
    }

    /// All projects, most recently updated first.
    #[must_use]
    pub fn list(&self) -> Vec<Project> {
        let mut projects: Vec<_> = self.projects.iter().map(|p| p.value().clone()).collect();
        projects.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        projects
    }

    /// Removes a project.
    pub fn delete(&self, id: ProjectId) -> Option<Project> {
        self.projects.remove(&id).map(|(_, project)| project)
    }

    /// Runs an edit against a copy of the project and keeps it only on success.
    ///
    /// Returns `None` when the project does not exist. The entry stays locked
    /// for the duration of `edit`, so concurrent edits to one project serialize.
    pub fn update<T, E>(
        &self,
        id: ProjectId,
        edit: impl FnOnce(&mut Project) -> Result<T, E>,
    ) -> Option<Result<T, E>> {
        let mut entry = self.projects.get_mut(&id)?;
        let mut draft = entry.value().clone();
        let result = edit(&mut draft);
        if result.is_ok() {
            *entry.value_mut() = draft;
        }
        Some(result)
    }

    /// Number of saved projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// True when nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
