mod get_featured_projects;
mod get_projects;
mod get_single_project;

pub use get_featured_projects::GetFeaturedProjectsUseCase;
pub use get_projects::GetProjectsUseCase;
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
