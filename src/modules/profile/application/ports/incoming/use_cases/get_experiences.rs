use crate::content::application::domain::Experience;

/// Timeline entries newest first, exactly as the content lists them.
pub trait GetExperiencesUseCase: Send + Sync {
    fn execute(&self, limit: Option<usize>) -> Vec<Experience>;
}
