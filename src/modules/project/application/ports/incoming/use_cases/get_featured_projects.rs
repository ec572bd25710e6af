use crate::content::application::domain::Project;

pub trait GetFeaturedProjectsUseCase: Send + Sync {
    /// Featured projects in source order, at most `limit` of them.
    fn execute(&self, limit: Option<usize>) -> Vec<Project>;
}
