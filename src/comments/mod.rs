//! Discussion-thread comments: fetching, filtering and ranking

pub mod client;
pub mod ranking;
pub mod thread;

use async_trait::async_trait;

use crate::core::models::Comment;
use crate::errors::RelayError;

pub use client::RemarkClient;
pub use ranking::{RankingPolicy, rank_comments};
pub use thread::{ThreadLink, ThreadPattern};

/// Source of ranked top-level comments for a thread.
#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn top_comments(&self, thread: &ThreadLink) -> Result<Vec<Comment>, RelayError>;
}
