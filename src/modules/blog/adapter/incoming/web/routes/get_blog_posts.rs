use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use super::dto::BlogPostSummary;
use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::{BlogCategory, CategorySelector};
use crate::content::application::search::{Listing, SearchTerm};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetBlogPostsQuery {
    /// Category label, or "Semua" for all.
    pub category: Option<String>,
    /// Case-insensitive text matched against title, excerpt and tags.
    pub search: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List blog posts
///
/// Category and search both apply; source order is kept.
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    params(GetBlogPostsQuery),
    responses(
        (status = 200, description = "Matching posts", body = inline(SuccessResponse<Listing<BlogPostSummary>>))
    )
)]
#[get("/api/blog")]
pub async fn get_blog_posts_handler(
    query: web::Query<GetBlogPostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let selector = CategorySelector::<BlogCategory>::parse(query.category.as_deref());
    if let CategorySelector::Unrecognized(label) = &selector {
        debug!(category = %label, "Unrecognized blog category, listing will be empty");
    }
    let term = SearchTerm::from(query.search.as_deref());

    let listing = data.blog.get_list.execute(selector, term);
    ApiResponse::success(listing.map(BlogPostSummary::from))
}
