use actix_web::{get, Responder};

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::{category_labels, ProjectCategory};
use crate::shared::api::ApiResponse;

/// Project filter categories
///
/// The "Semua" sentinel first, then every project category.
#[utoipa::path(
    get,
    path = "/api/projects/categories",
    tag = "projects",
    responses(
        (status = 200, description = "Category labels", body = inline(SuccessResponse<Vec<String>>))
    )
)]
#[get("/api/projects/categories")]
pub async fn get_project_categories_handler() -> impl Responder {
    ApiResponse::success(category_labels::<ProjectCategory>())
}
