use crate::content::application::domain::Project;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found: {0}")]
    NotFound(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

pub trait GetSingleProjectUseCase: Send + Sync {
    fn execute(&self, project_id: &str) -> Result<Project, GetSingleProjectError>;
}
