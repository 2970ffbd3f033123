//! rtjc-relay - relays news notifications from the legacy rtjc socket feed into a
//! Telegram chat and enriches them with AI summaries.
//!
//! # Architecture
//!
//! A notification line flows through:
//! 1. [`core::PinClassifier`], which decides whether the relayed line gets pinned
//! 2. [`worker::EnrichmentRouter`], which picks direct-link summary or ranked thread comments
//! 3. [`summary::Summarizer`] / [`comments::RemarkClient`] for content extraction,
//!    `OpenAI` summaries and comment ranking
//! 4. [`worker::RateLimitedDispatcher`], which delivers the results to the chat in batches
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rtjc_relay::api::RtjcListener;
//! use rtjc_relay::comments::{RankingPolicy, RemarkClient, ThreadPattern};
//! use rtjc_relay::core::PinClassifier;
//! use rtjc_relay::summary::{ExtractionClient, ExtractionSchema, SummaryCache, Summarizer};
//! use rtjc_relay::telegram::{Submitter, TelegramClient, TelegramSubmitter};
//! use rtjc_relay::utils::http::build_http_client;
//! use rtjc_relay::worker::EnrichmentRouter;
//! use rtjc_relay::LlmClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     rtjc_relay::setup_logging();
//!     let http = build_http_client(std::time::Duration::from_secs(60));
//!
//!     let telegram = TelegramClient::new(
//!         http.clone(),
//!         "https://api.telegram.org",
//!         "bot-token".to_string(),
//!         "@chat".to_string(),
//!     );
//!     let submitter: Arc<dyn Submitter> = Arc::new(TelegramSubmitter::spawn(telegram));
//!
//!     let summarizer = Summarizer::new(
//!         Box::new(ExtractionClient::new(
//!             http.clone(),
//!             "https://ureadability.radio-t.com/api/content/v1/parser",
//!             "token",
//!             ExtractionSchema::default(),
//!         )),
//!         Box::new(LlmClient::new(
//!             http.clone(),
//!             "https://api.openai.com/v1/responses",
//!             "openai-key".to_string(),
//!             None,
//!             "gpt-4o-mini".to_string(),
//!         )),
//!         SummaryCache::in_memory(),
//!     );
//!     let comments = RemarkClient::new(
//!         http,
//!         "https://remark42.radio-t.com/api/v1/find",
//!         "radiot",
//!         RankingPolicy::default(),
//!     );
//!     let router = EnrichmentRouter::new(
//!         Box::new(summarizer),
//!         Arc::new(comments),
//!         ThreadPattern::new("radio-t.com")?,
//!         "⚠",
//!     );
//!
//!     RtjcListener::new(18001, PinClassifier::default(), submitter, router)
//!         .listen()
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod comments;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod summary;
pub mod telegram;
pub mod utils;
pub mod worker;

pub use ai::{LlmClient, estimate_tokens};
pub use errors::RelayError;

/// Configure structured JSON logging.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling it again
/// after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// rtjc_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
