//! Project-list state for navigation and audit views.
//!
//! DESIGN
//! ======
//! The list is loaded once per session. The current project is not stored
//! here; it is derived from the route so the URL stays the single source of
//! truth for what is on screen.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::Project;

/// Shared project list state backed by `GET /api/projects`.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub launch_pending: bool,
    pub error: Option<String>,
}

impl ProjectsState {
    pub fn find(&self, project_id: &str) -> Option<&Project> {
        self.items.iter().find(|project| project.uuid == project_id)
    }

    /// Resolve an optional route parameter to a loaded project.
    pub fn current(&self, project_id: Option<&str>) -> Option<&Project> {
        project_id.and_then(|id| self.find(id))
    }
}
