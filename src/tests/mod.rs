pub mod support;

use std::time::Duration;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::Value;

use crate::contact::adapter::outgoing::SimulatedContactSender;
use crate::content::adapter::outgoing::StaticContentStore;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::{init_routes, AppState};

// ──────────────────────────────────────────────────────────
// Whole-app checks over the seeded content
// ──────────────────────────────────────────────────────────

macro_rules! seeded_app {
    () => {{
        let content = StaticContentStore::seeded();
        let state = AppState::new(
            content.clone(),
            SimulatedContactSender::new(Duration::ZERO, false),
        );
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(content))
                .app_data(custom_json_config())
                .app_data(custom_query_config())
                .configure(init_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn literal_segments_win_over_id_routes() {
    let app = seeded_app!();

    for uri in [
        "/api/projects/featured",
        "/api/projects/categories",
        "/api/blog/featured",
        "/api/blog/recent",
        "/api/blog/categories",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");

        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"].is_array(), "{uri} should list, not look up an id");
    }
}

#[actix_web::test]
async fn home_page_sections() {
    let app = seeded_app!();

    let req = test::TestRequest::get()
        .uri("/api/projects/featured?limit=3")
        .to_request();
    let featured: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(featured["data"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::get().uri("/api/skills?limit=6").to_request();
    let skills: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(skills["data"].as_array().unwrap().len(), 6);

    let req = test::TestRequest::get()
        .uri("/api/experiences?limit=2")
        .to_request();
    let experiences: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(experiences["data"][0]["current"], true);
    assert!(experiences["data"][0]["period"]
        .as_str()
        .unwrap()
        .ends_with("Sekarang"));
}

#[actix_web::test]
async fn seeded_project_filter_by_label() {
    let app = seeded_app!();

    let req = test::TestRequest::get()
        .uri("/api/projects?category=AI%2FML")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["count"], 1);
    assert_eq!(body["data"]["items"][0]["id"], "ai-chatbot");
}

#[actix_web::test]
async fn seeded_blog_search_and_detail() {
    let app = seeded_app!();

    let req = test::TestRequest::get()
        .uri("/api/blog?category=Backend&search=docker")
        .to_request();
    let listing: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listing["data"]["count"], 1);
    assert_eq!(listing["data"]["items"][0]["id"], "node-js-microservices");

    let req = test::TestRequest::get()
        .uri("/api/blog/node-js-microservices")
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;
    assert!(detail["data"]["content"].as_str().unwrap().starts_with("# "));
}

#[actix_web::test]
async fn contact_round_trip_through_simulated_sender() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(serde_json::json!({
            "name": "Budi",
            "email": "budi@example.com",
            "subject": "Kerja sama",
            "message": "Halo, saya tertarik bekerja sama."
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "success");
}

#[actix_web::test]
async fn ready_and_health() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/ready").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/health").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
