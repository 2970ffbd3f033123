//! Content-extraction service client (readability parser)

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{ContentExtractor, ExtractedContent};
use crate::errors::RelayError;
use crate::utils::http::fetch_json;

/// Names of the JSON fields carrying the article title and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSchema {
    pub title_field: String,
    pub content_field: String,
}

impl Default for ExtractionSchema {
    fn default() -> Self {
        Self {
            title_field: "Title".to_string(),
            content_field: "Content".to_string(),
        }
    }
}

impl ExtractionSchema {
    /// Missing or non-string fields read as empty.
    #[must_use]
    pub fn read(&self, body: &Value) -> ExtractedContent {
        let field = |name: &str| {
            body.get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        ExtractedContent {
            title: field(&self.title_field),
            content: field(&self.content_field),
        }
    }
}

pub struct ExtractionClient {
    http: Client,
    api_url: String,
    token: String,
    schema: ExtractionSchema,
}

impl ExtractionClient {
    #[must_use]
    pub fn new(http: Client, api_url: &str, token: &str, schema: ExtractionSchema) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            token: token.to_string(),
            schema,
        }
    }
}

#[async_trait]
impl ContentExtractor for ExtractionClient {
    async fn extract(&self, link: &str) -> Result<ExtractedContent, RelayError> {
        let request = self
            .http
            .get(&self.api_url)
            .query(&[("token", self.token.as_str()), ("url", link)]);
        let body: Value = fetch_json(request, link).await?;
        Ok(self.schema.read(&body))
    }
}
