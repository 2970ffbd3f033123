//! Decides how a notification line is enriched and produces the messages.

use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, warn};

use crate::comments::{CommentSource, ThreadPattern};
use crate::core::models::Comment;
use crate::errors::RelayError;
use crate::summary::LinkSummarizer;
use crate::telegram::format::{render_comment, render_error};
use crate::utils::links::first_link;

/// Capacity of the channel between the comment producer and the dispatcher.
pub const COMMENT_BUFFER: usize = 4;

/// Finite, single-use stream of rendered messages. Closed by the producer.
pub type Messages = mpsc::Receiver<String>;

pub struct EnrichmentRouter {
    summarizer: Arc<Mutex<Box<dyn LinkSummarizer>>>,
    comments: Arc<dyn CommentSource>,
    threads: ThreadPattern,
    marker: String,
}

impl EnrichmentRouter {
    #[must_use]
    pub fn new(
        summarizer: Box<dyn LinkSummarizer>,
        comments: Arc<dyn CommentSource>,
        threads: ThreadPattern,
        marker: &str,
    ) -> Self {
        Self {
            summarizer: Arc::new(Mutex::new(summarizer)),
            comments,
            threads,
            marker: marker.to_string(),
        }
    }

    /// Produces the enrichment messages for `line`.
    ///
    /// Lines without the marker yield an empty stream. A direct link yields one
    /// summary, a thread link yields one message per ranked comment, produced
    /// concurrently so delivery can start before the whole thread is summarized.
    /// Comment messages carry an `[i/N]` prefix when there is more than one.
    pub async fn route(&self, line: &str) -> Result<Messages, RelayError> {
        if !line.starts_with(&self.marker) {
            return Ok(closed_stream());
        }

        debug!("Summary for message: {}", line.trim_end());
        let link = first_link(line).ok_or_else(|| RelayError::NoLink(line.trim().to_string()))?;
        debug!("Link found: {}", link);

        if self.threads.is_thread_host(link) {
            return self.comment_summaries(link).await;
        }

        let summary = self.summarizer.lock().await.summary(link).await?;
        let (tx, rx) = mpsc::channel(1);
        let _ = tx.send(summary).await;
        Ok(rx)
    }

    async fn comment_summaries(&self, link: &str) -> Result<Messages, RelayError> {
        info!("Summary for thread link: {}", link);
        let thread = self.threads.parse(link)?;
        let comments = self.comments.top_comments(&thread).await?;

        let (tx, rx) = mpsc::channel(COMMENT_BUFFER);
        let summarizer = Arc::clone(&self.summarizer);
        let threads = self.threads.clone();

        tokio::spawn(async move {
            let total = comments.len();
            for (i, comment) in comments.iter().enumerate() {
                let body = comment_message(&summarizer, &threads, comment).await;
                let message = if total > 1 {
                    format!("[{}/{}] {}", i + 1, total, body)
                } else {
                    body
                };
                if tx.send(message).await.is_err() {
                    debug!("Message consumer is gone, stopping at comment {}/{}", i + 1, total);
                    break;
                }
            }
        });

        Ok(rx)
    }
}

/// Renders a comment, followed by a summary of the first outside link it carries.
/// A failed summary degrades to an inline error marker.
async fn comment_message(
    summarizer: &Mutex<Box<dyn LinkSummarizer>>,
    threads: &ThreadPattern,
    comment: &Comment,
) -> String {
    let rendered = render_comment(comment);
    let Some(link) = first_link(&comment.text).filter(|l| !threads.is_thread_host(l)) else {
        return rendered;
    };

    match summarizer.lock().await.summary(link).await {
        Ok(summary) if summary.is_empty() => rendered,
        Ok(summary) => format!("{rendered}\n\n{summary}"),
        Err(e) => {
            warn!("Can't get summary for {}: {}", link, e);
            format!("{rendered}\n\n{}", render_error(&e))
        }
    }
}

fn closed_stream() -> Messages {
    let (_, rx) = mpsc::channel(1);
    rx
}
