use tracing::debug;

use crate::content::application::domain::{BlogCategory, BlogPost, CategorySelector};
use crate::content::application::ports::outgoing::ContentQuery;
use crate::content::application::search::{filter_blog_posts, Listing, SearchTerm};
use crate::modules::blog::application::ports::incoming::use_cases::GetBlogPostsUseCase;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetBlogPostsService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetBlogPostsService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetBlogPostsUseCase for GetBlogPostsService<Q>
where
    Q: ContentQuery,
{
    fn execute(
        &self,
        category: CategorySelector<BlogCategory>,
        term: SearchTerm,
    ) -> Listing<BlogPost> {
        let listing = filter_blog_posts(&self.query, &category, &term);
        debug!(
            ?category,
            search = term.as_str(),
            count = listing.count,
            "Blog listing filtered"
        );
        listing
    }
}
