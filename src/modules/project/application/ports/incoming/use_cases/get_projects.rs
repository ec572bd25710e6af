use crate::content::application::domain::{CategorySelector, Project, ProjectCategory};
use crate::content::application::search::Listing;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Project listing page. Category only: the search box belongs to the blog.
pub trait GetProjectsUseCase: Send + Sync {
    fn execute(&self, category: CategorySelector<ProjectCategory>) -> Listing<Project>;
}
