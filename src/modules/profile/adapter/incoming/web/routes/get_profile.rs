use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::PersonalInfo;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Site owner's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Personal info and social links", body = inline(SuccessResponse<PersonalInfo>))
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.profile.get_profile.execute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_get_profile() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Test Person");
        assert!(body["data"]["social"]["github"].is_string());
    }
}
