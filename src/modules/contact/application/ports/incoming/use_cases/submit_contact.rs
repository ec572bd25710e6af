use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::contact::application::domain::{ContactStatus, ContactSubmission};
use crate::modules::contact::application::ports::outgoing::ContactSendError;

//
// ──────────────────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub status: ContactStatus,
    pub received_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Delivery rejected: {0}")]
    Rejected(String),
}

impl From<ContactSendError> for SubmitContactError {
    fn from(err: ContactSendError) -> Self {
        match err {
            ContactSendError::Transport(msg) => Self::DeliveryFailed(msg),
            ContactSendError::Rejected(msg) => Self::Rejected(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactReceipt, SubmitContactError>;
}
