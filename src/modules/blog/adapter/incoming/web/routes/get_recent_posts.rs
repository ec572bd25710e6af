use actix_web::{get, web, Responder};

use super::dto::BlogPostSummary;
use crate::api::schemas::SuccessResponse;
use crate::shared::api::{ApiResponse, LimitQuery};
use crate::AppState;

/// Recent blog posts
///
/// The first posts in source order; three when no limit is given.
#[utoipa::path(
    get,
    path = "/api/blog/recent",
    tag = "blog",
    params(LimitQuery),
    responses(
        (status = 200, description = "Most recent posts", body = inline(SuccessResponse<Vec<BlogPostSummary>>))
    )
)]
#[get("/api/blog/recent")]
pub async fn get_recent_posts_handler(
    query: web::Query<LimitQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let posts: Vec<BlogPostSummary> = data
        .blog
        .get_recent
        .execute(query.limit)
        .into_iter()
        .map(BlogPostSummary::from)
        .collect();

    ApiResponse::success(posts)
}
