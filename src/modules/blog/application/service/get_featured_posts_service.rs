use crate::content::application::domain::BlogPost;
use crate::content::application::ports::outgoing::ContentQuery;
use crate::content::application::search::limited;
use crate::modules::blog::application::ports::incoming::use_cases::GetFeaturedPostsUseCase;

pub struct GetFeaturedPostsService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetFeaturedPostsService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetFeaturedPostsUseCase for GetFeaturedPostsService<Q>
where
    Q: ContentQuery,
{
    fn execute(&self, limit: Option<usize>) -> Vec<BlogPost> {
        limited(self.query.blog_posts().iter().filter(|p| p.featured), limit)
    }
}
