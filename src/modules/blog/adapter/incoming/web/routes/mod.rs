mod dto;
mod get_blog_categories;
mod get_blog_posts;
mod get_featured_posts;
mod get_recent_posts;
mod get_single_post;

pub use dto::{BlogPostDetail, BlogPostSummary};
pub use get_blog_categories::*;
pub use get_blog_posts::*;
pub use get_featured_posts::*;
pub use get_recent_posts::*;
pub use get_single_post::*;
