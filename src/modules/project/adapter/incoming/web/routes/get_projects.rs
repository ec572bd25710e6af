use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::{CategorySelector, Project, ProjectCategory};
use crate::content::application::search::Listing;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetProjectsQuery {
    /// Category label, or "Semua" for all.
    pub category: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List projects
///
/// Filters the catalog by category, keeping catalog order.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Matching projects", body = inline(SuccessResponse<Listing<Project>>))
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let selector = CategorySelector::<ProjectCategory>::parse(query.category.as_deref());
    if let CategorySelector::Unrecognized(label) = &selector {
        debug!(category = %label, "Unrecognized project category, listing will be empty");
    }

    ApiResponse::success(data.project.get_list.execute(selector))
}
