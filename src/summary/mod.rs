//! Link summaries: content extraction, AI generation and caching

pub mod cache;
pub mod extract;
pub mod fetcher;

use async_trait::async_trait;

use crate::errors::RelayError;

pub use cache::SummaryCache;
pub use extract::{ExtractionClient, ExtractionSchema};
pub use fetcher::Summarizer;

/// Title and body of an article as returned by the extraction service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    pub title: String,
    pub content: String,
}

#[async_trait]
pub trait ContentExtractor: Send + Sync {
    async fn extract(&self, link: &str) -> Result<ExtractedContent, RelayError>;
}

/// Generative summarization of a single text blob.
#[async_trait]
pub trait TextSummarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, RelayError>;
}

/// Turns a link into a rendered summary. An empty string means the summary
/// was unusable.
#[async_trait]
pub trait LinkSummarizer: Send {
    async fn summary(&mut self, link: &str) -> Result<String, RelayError>;
}
