use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::Experience;
use crate::shared::api::{ApiResponse, LimitQuery};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperienceResponse {
    #[serde(flatten)]
    pub experience: Experience,
    /// e.g. `2022-01 - Sekarang`
    #[schema(example = "2022-01 - Sekarang")]
    pub period: String,
}

impl From<Experience> for ExperienceResponse {
    fn from(experience: Experience) -> Self {
        let period = experience.period();
        Self { experience, period }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Experience timeline, newest first
#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "profile",
    params(LimitQuery),
    responses(
        (status = 200, description = "Experience entries", body = inline(SuccessResponse<Vec<ExperienceResponse>>))
    )
)]
#[get("/api/experiences")]
pub async fn get_experiences_handler(
    query: web::Query<LimitQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experiences: Vec<ExperienceResponse> = data
        .profile
        .get_experiences
        .execute(query.limit)
        .into_iter()
        .map(ExperienceResponse::from)
        .collect();

    ApiResponse::success(experiences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_experiences_carry_period() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_experiences_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/experiences").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let entries = body["data"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "now");
        assert_eq!(entries[0]["current"], true);
        assert_eq!(entries[0]["period"], "2022-01 - Sekarang");
        assert_eq!(entries[1]["period"], "2020-03 - 2021-12");
    }
}
