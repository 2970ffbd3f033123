//! Remark42 comment service client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::CommentSource;
use super::ranking::{RankingPolicy, rank_comments};
use super::thread::ThreadLink;
use crate::core::models::Comment;
use crate::errors::RelayError;
use crate::utils::http::fetch_json;

#[derive(Debug, Deserialize)]
struct FindResponse {
    #[serde(default)]
    comments: Vec<Comment>,
}

pub struct RemarkClient {
    http: Client,
    api_url: String,
    site: String,
    policy: RankingPolicy,
}

impl RemarkClient {
    #[must_use]
    pub fn new(http: Client, api_url: &str, site: &str, policy: RankingPolicy) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            site: site.to_string(),
            policy,
        }
    }

    async fn fetch_comments(&self, thread: &ThreadLink) -> Result<Vec<Comment>, RelayError> {
        let request = self.http.get(&self.api_url).query(&[
            ("site", self.site.as_str()),
            ("url", thread.as_str()),
            ("sort", "-score"),
            ("format", "plain"),
        ]);

        let response: FindResponse = fetch_json(request, thread.as_str()).await?;
        debug!(
            "Loaded {} comments for {}",
            response.comments.len(),
            thread
        );
        Ok(response.comments)
    }
}

#[async_trait]
impl CommentSource for RemarkClient {
    async fn top_comments(&self, thread: &ThreadLink) -> Result<Vec<Comment>, RelayError> {
        let comments = self
            .fetch_comments(thread)
            .await
            .map_err(|e| RelayError::comments(thread.as_str(), e))?;
        let ranked = rank_comments(comments, self.policy);
        info!("{} top comments for {}", ranked.len(), thread);
        Ok(ranked)
    }
}
