use crate::content::application::domain::BlogPost;
use crate::content::application::ports::outgoing::ContentQuery;
use crate::content::application::search::limited;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetRecentPostsUseCase, DEFAULT_RECENT_POSTS,
};

pub struct GetRecentPostsService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetRecentPostsService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetRecentPostsUseCase for GetRecentPostsService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self, limit: Option<usize>) -> Vec<BlogPost> {
        limited(
            self.query.blog_posts(),
            Some(limit.unwrap_or(DEFAULT_RECENT_POSTS)),
        )
    }
}
