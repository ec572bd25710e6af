mod get_featured_projects;
mod get_project_categories;
mod get_projects;
mod get_single_project;

pub use get_featured_projects::*;
pub use get_project_categories::*;
pub use get_projects::*;
pub use get_single_project::*;
