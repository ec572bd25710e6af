use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::content::adapter::outgoing::StaticContentStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    problems: Vec<String>,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Re-runs the content integrity check
#[get("/ready")]
pub async fn readiness(content: web::Data<StaticContentStore>) -> impl Responder {
    match content.verify() {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content: "ok",
            problems: Vec::new(),
        }),
        Err(errors) => HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            content: "inconsistent",
            problems: errors.iter().map(ToString::to_string).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::content_fixtures::{fixture_store, project};
    use crate::content::application::domain::ProjectCategory;

    #[actix_web::test]
    async fn test_health_is_always_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_ready_with_seeded_content() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StaticContentStore::seeded()))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["content"], "ok");
        assert!(body.get("problems").is_none());
    }

    #[actix_web::test]
    async fn test_ready_reports_integrity_problems() {
        let mut store = fixture_store();
        store.projects = vec![
            project("dup", "One", ProjectCategory::Frontend),
            project("dup", "Two", ProjectCategory::Frontend),
        ];

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StaticContentStore::from_store(store)))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["problems"][0], "duplicate project id: dup");
    }
}
