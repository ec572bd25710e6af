pub mod get_blog_posts_service;
pub mod get_featured_posts_service;
pub mod get_recent_posts_service;
pub mod get_single_post_service;

pub use get_blog_posts_service::GetBlogPostsService;
pub use get_featured_posts_service::GetFeaturedPostsService;
pub use get_recent_posts_service::GetRecentPostsService;
pub use get_single_post_service::GetSinglePostService;
