use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::Project;
use crate::shared::api::{ApiResponse, LimitQuery};
use crate::AppState;

/// Featured projects
#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    params(LimitQuery),
    responses(
        (status = 200, description = "Featured projects in catalog order", body = inline(SuccessResponse<Vec<Project>>))
    )
)]
#[get("/api/projects/featured")]
pub async fn get_featured_projects_handler(
    query: web::Query<LimitQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.project.get_featured.execute(query.limit))
}
