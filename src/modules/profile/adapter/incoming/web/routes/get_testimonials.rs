use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::content::application::domain::Testimonial;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Client testimonials
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = "profile",
    responses(
        (status = 200, description = "All testimonials", body = inline(SuccessResponse<Vec<Testimonial>>))
    )
)]
#[get("/api/testimonials")]
pub async fn get_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.profile.get_testimonials.execute())
}
