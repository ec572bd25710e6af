use actix_web::{get, Responder};

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::{category_labels, BlogCategory};
use crate::shared::api::ApiResponse;

/// Blog filter categories
#[utoipa::path(
    get,
    path = "/api/blog/categories",
    tag = "blog",
    responses(
        (status = 200, description = "Category labels, sentinel first", body = inline(SuccessResponse<Vec<String>>))
    )
)]
#[get("/api/blog/categories")]
pub async fn get_blog_categories_handler() -> impl Responder {
    ApiResponse::success(category_labels::<BlogCategory>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_blog_categories() {
        let app = test::init_service(App::new().service(get_blog_categories_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/blog/categories")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"][0], "Semua");
        assert_eq!(body["data"][5], "CSS");
    }
}
