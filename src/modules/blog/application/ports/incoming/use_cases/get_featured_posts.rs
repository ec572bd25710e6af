use crate::content::application::domain::BlogPost;

pub trait GetFeaturedPostsUseCase: Send + Sync {
    fn execute(&self, limit: Option<usize>) -> Vec<BlogPost>;
}
