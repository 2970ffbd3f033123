use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use super::router::Messages;
use crate::telegram::Submitter;

/// Messages delivered before the dispatcher pauses.
pub const DISPATCH_BATCH_SIZE: usize = 15;

/// Pause after each full batch, keeping bursts under the chat's rate ceiling.
pub const DISPATCH_COOLDOWN: Duration = Duration::from_secs(60);

/// Drains a message stream into the chat, pausing after every batch.
pub struct RateLimitedDispatcher {
    submitter: Arc<dyn Submitter>,
}

impl RateLimitedDispatcher {
    #[must_use]
    pub fn new(submitter: Arc<dyn Submitter>) -> Self {
        Self { submitter }
    }

    /// Forwards messages in order as HTML. An empty message aborts the rest of
    /// the batch. After every [`DISPATCH_BATCH_SIZE`] delivered messages, waits
    /// for the chat queue to drain and then for [`DISPATCH_COOLDOWN`].
    ///
    /// Returns the number of messages delivered.
    pub async fn dispatch(&self, mut messages: Messages) -> usize {
        let mut sent = 0usize;
        let mut index = 0usize;

        while let Some(message) = messages.recv().await {
            index += 1;
            if message.is_empty() {
                warn!("Empty summary item #{}, dropping the rest of the batch", index);
                break;
            }

            if let Err(e) = self.submitter.submit_html(&message, false).await {
                warn!("Can't send summary item #{}: {}", index, e);
                continue;
            }
            sent += 1;

            if sent % DISPATCH_BATCH_SIZE == 0 {
                info!(
                    "Sent {} messages, waiting for the queue and {}s cooldown",
                    sent,
                    DISPATCH_COOLDOWN.as_secs()
                );
                self.submitter.wait_message_queue().await;
                tokio::time::sleep(DISPATCH_COOLDOWN).await;
            }
        }

        sent
    }
}
