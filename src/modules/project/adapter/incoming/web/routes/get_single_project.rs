use actix_web::{get, web, HttpResponse, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::content::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one project
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = String, Path, description = "Project id, e.g. `ai-chatbot`")),
    responses(
        (status = 200, description = "The project", body = inline(SuccessResponse<Project>)),
        (status = 404, description = "No project with that id", body = ErrorResponse)
    )
)]
#[get("/api/projects/{project_id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_single.execute(&project_id) {
        Ok(project) => ApiResponse::success(project),
        Err(err) => map_get_single_project_error(err),
    }
}

fn map_get_single_project_error(err: GetSingleProjectError) -> HttpResponse {
    match err {
        GetSingleProjectError::NotFound(_) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
    }
}
