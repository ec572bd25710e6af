use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::{ContactSubmission, ContactValidationError};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactReceipt, SubmitContactError,
};
use crate::shared::api::{ApiFieldError, ApiResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Missing fields count as empty, so they fail validation with the rest.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    #[schema(example = "Budi Santoso")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "budi@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Kerja sama proyek")]
    pub subject: String,
    #[serde(default)]
    #[schema(example = "Halo, saya ingin berdiskusi tentang proyek baru.")]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Send a message through the contact form
///
/// The response arrives once delivery finishes; until then the submission is pending.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message delivered", body = inline(SuccessResponse<ContactReceipt>)),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "One or more fields invalid", body = ErrorResponse),
        (status = 502, description = "Delivery channel refused the message", body = ErrorResponse),
        (status = 503, description = "Delivery channel unavailable, retry later", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<ContactRequest>,
) -> impl Responder {
    let ContactRequest {
        name,
        email,
        subject,
        message,
    } = payload.into_inner();

    // 1️⃣ Validate every field
    let submission = match ContactSubmission::parse(name, email, subject, message) {
        Ok(submission) => submission,
        Err(err) => return map_validation_error(err),
    };

    // 2️⃣ Deliver
    match data.contact.submit.execute(submission).await {
        Ok(receipt) => ApiResponse::success(receipt),
        Err(err) => {
            error!("Contact submission failed: {}", err);
            map_submit_contact_error(err)
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_validation_error(err: ContactValidationError) -> HttpResponse {
    let fields = err
        .fields()
        .iter()
        .map(|e| ApiFieldError {
            field: e.field.as_str().to_string(),
            message: e.message.to_string(),
        })
        .collect();

    ApiResponse::validation_failed("Periksa kembali isian formulir", fields)
}

fn map_submit_contact_error(err: SubmitContactError) -> HttpResponse {
    match err {
        SubmitContactError::DeliveryFailed(_) => ApiResponse::service_unavailable(
            "CONTACT_DELIVERY_FAILED",
            "Pesan gagal dikirim, silakan coba lagi",
        ),
        SubmitContactError::Rejected(_) => {
            ApiResponse::bad_gateway("CONTACT_REJECTED", "Pesan ditolak oleh layanan pengiriman")
        }
    }
}
