use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::ContactSubmission;
use crate::modules::contact::application::ports::outgoing::{ContactSendError, ContactSender};

/// Stands in for a mail channel: waits, logs, and reports the configured outcome.
/// Nothing leaves the process.
#[derive(Debug, Clone)]
pub struct SimulatedContactSender {
    delay: Duration,
    fail: bool,
}

impl SimulatedContactSender {
    pub fn new(delay: Duration, fail: bool) -> Self {
        Self { delay, fail }
    }
}

#[async_trait]
impl ContactSender for SimulatedContactSender {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactSendError> {
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(ContactSendError::Transport(
                "simulated delivery failure".to_string(),
            ));
        }

        // The body stays out of the log.
        info!(
            name = submission.name(),
            email = submission.email(),
            subject = submission.subject(),
            message_chars = submission.message().chars().count(),
            "Contact form submitted"
        );
        Ok(())
    }
}
