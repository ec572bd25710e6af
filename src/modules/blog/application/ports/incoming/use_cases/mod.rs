mod get_blog_posts;
mod get_featured_posts;
mod get_recent_posts;
mod get_single_post;

pub use get_blog_posts::GetBlogPostsUseCase;
pub use get_featured_posts::GetFeaturedPostsUseCase;
pub use get_recent_posts::{GetRecentPostsUseCase, DEFAULT_RECENT_POSTS};
pub use get_single_post::{GetSinglePostError, GetSinglePostUseCase};
