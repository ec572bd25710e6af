use tracing::debug;

use crate::content::application::domain::BlogPost;
use crate::content::application::ports::outgoing::ContentQuery;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetSinglePostError, GetSinglePostUseCase,
};

pub struct GetSinglePostService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetSinglePostService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetSinglePostUseCase for GetSinglePostService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self, post_id: &str) -> Result<BlogPost, GetSinglePostError> {
        self.query.find_blog_post(post_id).cloned().ok_or_else(|| {
            debug!(post_id, "Blog post lookup missed");
            GetSinglePostError::NotFound(post_id.to_string())
        })
    }
}
