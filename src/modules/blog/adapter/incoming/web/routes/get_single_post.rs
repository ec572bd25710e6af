use actix_web::{get, web, HttpResponse, Responder};

use super::dto::BlogPostDetail;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::blog::application::ports::incoming::use_cases::GetSinglePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one blog post, body included
#[utoipa::path(
    get,
    path = "/api/blog/{post_id}",
    tag = "blog",
    params(("post_id" = String, Path, description = "Post id, e.g. `modern-css-features`")),
    responses(
        (status = 200, description = "The post", body = inline(SuccessResponse<BlogPostDetail>)),
        (status = 404, description = "No post with that id", body = ErrorResponse)
    )
)]
#[get("/api/blog/{post_id}")]
pub async fn get_single_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.get_single.execute(&post_id) {
        Ok(post) => ApiResponse::success(BlogPostDetail::from(post)),
        Err(err) => map_get_single_post_error(err),
    }
}

fn map_get_single_post_error(err: GetSinglePostError) -> HttpResponse {
    match err {
        GetSinglePostError::NotFound(_) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Blog post not found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_get_single_post_success() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_single_post_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/blog/c").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], "c");
        assert!(body["data"]["content"].is_string());
        assert_eq!(body["data"]["tags"], serde_json::json!(["Docker", "Node.js"]));
    }

    #[actix_web::test]
    async fn test_get_single_post_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_single_post_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/blog/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "POST_NOT_FOUND");
    }
}
