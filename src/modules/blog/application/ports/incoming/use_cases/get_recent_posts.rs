use crate::content::application::domain::BlogPost;

/// How many posts the home page lists when no limit is given.
pub const DEFAULT_RECENT_POSTS: usize = 3;

/// The first posts in source order. The seed lists posts newest first, so
/// no date sort happens here.
pub trait GetRecentPostsUseCase: Send + Sync {
    fn execute(&self, limit: Option<usize>) -> Vec<BlogPost>;
}
