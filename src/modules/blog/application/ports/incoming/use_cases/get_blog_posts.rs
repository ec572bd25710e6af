use crate::content::application::domain::{BlogCategory, BlogPost, CategorySelector};
use crate::content::application::search::{Listing, SearchTerm};

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Blog listing page: the category tab AND the search box.
pub trait GetBlogPostsUseCase: Send + Sync {
    fn execute(&self, category: CategorySelector<BlogCategory>, term: SearchTerm)
        -> Listing<BlogPost>;
}
