//! Outbound message queue in front of [`TelegramClient`].
//!
//! Submissions return as soon as the message is queued; a background task
//! delivers them in order. The pending count is published over a watch channel
//! so callers can wait for the queue to drain.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{error, warn};

use super::Submitter;
use super::client::TelegramClient;
use crate::errors::RelayError;

#[derive(Debug)]
struct Outbound {
    text: String,
    html: bool,
    pin: bool,
}

pub struct TelegramSubmitter {
    tx: mpsc::UnboundedSender<Outbound>,
    pending: Arc<watch::Sender<usize>>,
}

impl TelegramSubmitter {
    /// Starts the delivery task on the current runtime.
    #[must_use]
    pub fn spawn(client: TelegramClient) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Outbound>();
        let (pending, _) = watch::channel(0usize);
        let pending = Arc::new(pending);

        let worker_pending = Arc::clone(&pending);
        tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                deliver(&client, &msg).await;
                worker_pending.send_modify(|n| *n = n.saturating_sub(1));
            }
        });

        Self { tx, pending }
    }

    fn enqueue(&self, msg: Outbound) -> Result<(), RelayError> {
        self.pending.send_modify(|n| *n += 1);
        if self.tx.send(msg).is_err() {
            self.pending.send_modify(|n| *n = n.saturating_sub(1));
            return Err(RelayError::ChatError("outbound queue is closed".to_string()));
        }
        Ok(())
    }
}

async fn deliver(client: &TelegramClient, msg: &Outbound) {
    let message_id = match client.send_message(&msg.text, msg.html).await {
        Ok(id) => id,
        Err(e) => {
            error!("Failed to send Telegram message: {}", e);
            return;
        }
    };

    if msg.pin {
        if let Err(e) = client.pin_message(message_id).await {
            warn!("Failed to pin Telegram message {}: {}", message_id, e);
        }
    }
}

#[async_trait]
impl Submitter for TelegramSubmitter {
    async fn submit(&self, text: &str, pin: bool) -> Result<(), RelayError> {
        self.enqueue(Outbound {
            text: text.to_string(),
            html: false,
            pin,
        })
    }

    async fn submit_html(&self, text: &str, pin: bool) -> Result<(), RelayError> {
        self.enqueue(Outbound {
            text: text.to_string(),
            html: true,
            pin,
        })
    }

    async fn wait_message_queue(&self) {
        let mut rx = self.pending.subscribe();
        let _ = rx.wait_for(|n| *n == 0).await;
    }
}
