use actix_web::{get, web, Responder};

use super::dto::BlogPostSummary;
use crate::api::schemas::SuccessResponse;
use crate::shared::api::{ApiResponse, LimitQuery};
use crate::AppState;

/// Featured blog posts
#[utoipa::path(
    get,
    path = "/api/blog/featured",
    tag = "blog",
    params(LimitQuery),
    responses(
        (status = 200, description = "Featured posts in source order", body = inline(SuccessResponse<Vec<BlogPostSummary>>))
    )
)]
#[get("/api/blog/featured")]
pub async fn get_featured_posts_handler(
    query: web::Query<LimitQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let posts: Vec<BlogPostSummary> = data
        .blog
        .get_featured
        .execute(query.limit)
        .into_iter()
        .map(BlogPostSummary::from)
        .collect();

    ApiResponse::success(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_featured_posts() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_featured_posts_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/blog/featured").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"][0]["id"], "a");
        assert_eq!(body["data"][1]["id"], "c");
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }
}
