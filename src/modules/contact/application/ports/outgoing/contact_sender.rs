use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactSubmission;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactSendError {
    /// The channel could not be reached; trying again may work.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// Delivers a validated contact message to the site owner.
#[async_trait]
pub trait ContactSender: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactSendError>;
}
