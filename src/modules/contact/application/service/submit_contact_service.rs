use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::contact::application::domain::{ContactStatus, ContactSubmission};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactReceipt, SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactSender;

#[derive(Debug, Clone)]
pub struct SubmitContactService<S>
where
    S: ContactSender,
{
    sender: S,
}

impl<S> SubmitContactService<S>
where
    S: ContactSender,
{
    pub fn new(sender: S) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl<S> SubmitContactUseCase for SubmitContactService<S>
where
    S: ContactSender,
{
    async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactReceipt, SubmitContactError> {
        let id = Uuid::new_v4();
        let received_at = Utc::now();
        info!(%id, status = ?ContactStatus::Pending, subject = submission.subject(), "Contact submission received");

        match self.sender.send(&submission).await {
            Ok(()) => {
                info!(%id, status = ?ContactStatus::Success, "Contact submission delivered");
                Ok(ContactReceipt {
                    id,
                    status: ContactStatus::Success,
                    received_at,
                })
            }
            Err(err) => {
                warn!(%id, status = ?ContactStatus::Error, error = %err, "Contact submission failed");
                Err(err.into())
            }
        }
    }
}
