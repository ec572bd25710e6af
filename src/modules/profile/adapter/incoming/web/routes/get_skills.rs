use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::Skill;
use crate::content::application::search::SkillGroups;
use crate::shared::api::{ApiResponse, LimitQuery};
use crate::AppState;

/// Skills in source order
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "profile",
    params(LimitQuery),
    responses(
        (status = 200, description = "Flat skill list", body = inline(SuccessResponse<Vec<Skill>>))
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(
    query: web::Query<LimitQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.profile.get_skills.execute(query.limit))
}

/// Skills grouped by category
///
/// Groups appear in the order their category first shows up.
#[utoipa::path(
    get,
    path = "/api/skills/grouped",
    tag = "profile",
    responses(
        (status = 200, description = "Ordered skill groups", body = inline(SuccessResponse<SkillGroups>))
    )
)]
#[get("/api/skills/grouped")]
pub async fn get_grouped_skills_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.profile.get_grouped_skills.execute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_skills_with_limit() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_skills_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/skills?limit=2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["name"], "React");
        assert_eq!(body["data"][0]["level"], 95);
    }

    #[actix_web::test]
    async fn test_grouped_skills_keep_first_seen_order() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_grouped_skills_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/skills/grouped")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let groups = body["data"]["groups"].as_array().unwrap();
        let categories: Vec<&str> = groups
            .iter()
            .map(|g| g["category"].as_str().unwrap())
            .collect();
        assert_eq!(categories, vec!["frontend", "backend", "tools"]);
        assert_eq!(groups[0]["title"], "Frontend Development");
        assert_eq!(groups[0]["skills"].as_array().unwrap().len(), 2);
    }
}
