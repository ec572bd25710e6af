use crate::content::application::domain::BlogPost;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSinglePostError {
    #[error("Blog post not found: {0}")]
    NotFound(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

pub trait GetSinglePostUseCase: Send + Sync {
    fn execute(&self, post_id: &str) -> Result<BlogPost, GetSinglePostError>;
}
