//! All Telegram-specific functionality

pub mod client;
pub mod format;
pub mod queue;

use async_trait::async_trait;

use crate::errors::RelayError;

pub use client::TelegramClient;
pub use format::{render_comment, render_summary};
pub use queue::TelegramSubmitter;

/// Chat-delivery channel. Submissions may be delivered asynchronously.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, text: &str, pin: bool) -> Result<(), RelayError>;
    async fn submit_html(&self, text: &str, pin: bool) -> Result<(), RelayError>;
    /// Resolves once every submitted message has left the internal queue.
    async fn wait_message_queue(&self);
}
