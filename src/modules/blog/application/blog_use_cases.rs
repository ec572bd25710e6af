use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogPostsUseCase, GetFeaturedPostsUseCase, GetRecentPostsUseCase, GetSinglePostUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub get_list: Arc<dyn GetBlogPostsUseCase + Send + Sync>,
    pub get_featured: Arc<dyn GetFeaturedPostsUseCase + Send + Sync>,
    pub get_recent: Arc<dyn GetRecentPostsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSinglePostUseCase + Send + Sync>,
}
