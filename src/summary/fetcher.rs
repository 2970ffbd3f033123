use async_trait::async_trait;
use tracing::{debug, warn};

use super::cache::SummaryCache;
use super::{ContentExtractor, LinkSummarizer, TextSummarizer};
use crate::core::models::SummaryItem;
use crate::errors::RelayError;
use crate::telegram::format::render_summary;

/// Resolves links to rendered AI summaries, writing through [`SummaryCache`].
///
/// Takes `&mut self` because the cache is unsynchronized; share it behind a lock.
pub struct Summarizer {
    extractor: Box<dyn ContentExtractor>,
    ai: Box<dyn TextSummarizer>,
    cache: SummaryCache,
}

impl Summarizer {
    #[must_use]
    pub fn new(
        extractor: Box<dyn ContentExtractor>,
        ai: Box<dyn TextSummarizer>,
        cache: SummaryCache,
    ) -> Self {
        Self {
            extractor,
            ai,
            cache,
        }
    }

    #[must_use]
    pub fn cache(&self) -> &SummaryCache {
        &self.cache
    }

    async fn fetch(&self, link: &str) -> Result<SummaryItem, RelayError> {
        debug!("Summary for link: {}", link);
        let extracted = self.extractor.extract(link).await?;
        let generated = self
            .ai
            .summarize(&format!("{} - {}", extracted.title, extracted.content))
            .await?;
        Ok(SummaryItem::new(extracted.title, generated))
    }
}

#[async_trait]
impl LinkSummarizer for Summarizer {
    async fn summary(&mut self, link: &str) -> Result<String, RelayError> {
        if let Some(item) = self.cache.get(link) {
            debug!("Summary for link loaded from cache: {}", link);
            return Ok(render_summary(item));
        }

        let item = self
            .fetch(link)
            .await
            .map_err(|e| RelayError::summary(link, e))?;
        if item.is_empty() {
            warn!("Empty summary for {}, not cached", link);
            return Ok(String::new());
        }

        let rendered = render_summary(&item);
        self.cache.insert(link, item);
        if self.cache.is_persistent() {
            debug!("Summary for link saved in cache: {}", link);
            if let Err(e) = self.cache.persist() {
                warn!("Cache saving problem: {}", e);
            }
        }

        Ok(rendered)
    }
}
