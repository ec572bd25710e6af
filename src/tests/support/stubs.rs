use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::contact::application::domain::{ContactStatus, ContactSubmission};
use crate::contact::application::ports::incoming::use_cases::{
    ContactReceipt, SubmitContactError, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct StubSubmitContact {
    result: Option<Result<(), SubmitContactError>>,
}

impl StubSubmitContact {
    pub fn success() -> Self {
        Self {
            result: Some(Ok(())),
        }
    }

    pub fn failing(err: SubmitContactError) -> Self {
        Self {
            result: Some(Err(err)),
        }
    }

    /// For requests that must be stopped by validation first.
    pub fn unreachable() -> Self {
        Self { result: None }
    }
}

#[async_trait]
impl SubmitContactUseCase for StubSubmitContact {
    async fn execute(
        &self,
        _submission: ContactSubmission,
    ) -> Result<ContactReceipt, SubmitContactError> {
        match &self.result {
            Some(Ok(())) => Ok(ContactReceipt {
                id: Uuid::new_v4(),
                status: ContactStatus::Success,
                received_at: Utc::now(),
            }),
            Some(Err(err)) => Err(err.clone()),
            None => unreachable!("submission should have failed validation"),
        }
    }
}
