//! LLM (`OpenAI`) API client module
//!
//! Generates article summaries through the Responses API.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::RelayError;
use crate::prompt::{SUMMARY_SYSTEM_PROMPT, sanitize_article_text};
use crate::summary::TextSummarizer;

const MAX_OUTPUT_TOKENS: usize = 1_000;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    api_url: String,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(
        http: Client,
        api_url: &str,
        api_key: String,
        org_id: Option<String>,
        model_name: String,
    ) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            api_key,
            org_id,
            model_name,
        }
    }

    #[must_use]
    pub fn build_prompt(&self, article: &str) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(SUMMARY_SYSTEM_PROMPT.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(sanitize_article_text(article)),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    fn request_body(&self, prompt: &[ChatCompletionMessage]) -> Value {
        let input_messages: Vec<Value> = prompt
            .iter()
            .filter_map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function | MessageRole::tool => return None,
                };
                match &msg.content {
                    Content::Text(text) => Some(json!({
                        "role": role_str,
                        "content": text,
                    })),
                    Content::ImageUrl(_) => None,
                }
            })
            .collect();

        json!({
            "model": self.model_name,
            "input": input_messages,
            "max_output_tokens": MAX_OUTPUT_TOKENS,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP request to `OpenAI` fails or the response
    /// carries no output text.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, RelayError> {
        #[cfg(feature = "debug-logs")]
        info!("Using summary prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating summary, estimated input tokens: {}",
            prompt
                .iter()
                .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
                .sum::<usize>()
        );

        let mut request = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(&prompt));
        if let Some(org) = &self.org_id {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RelayError::HttpError(format!("OpenAI API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RelayError::OpenAIError(format!(
                "status {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            RelayError::OpenAIError(format!("Failed to parse OpenAI response: {}", e))
        })?;

        extract_output_text(&response_json)
            .ok_or_else(|| RelayError::OpenAIError("No text in response".to_string()))
    }
}

/// Pulls generated text from a Responses API payload: `output_text` when
/// present, otherwise the `output_text` parts of `output[].content[]`.
#[must_use]
pub fn extract_output_text(response_json: &Value) -> Option<String> {
    if let Some(text) = response_json.get("output_text").and_then(Value::as_str) {
        return Some(text.trim().to_string());
    }

    let mut collected: Vec<String> = Vec::new();
    let items = response_json.get("output").and_then(Value::as_array)?;
    for item in items {
        let Some(parts) = item.get("content").and_then(Value::as_array) else {
            continue;
        };
        for p in parts {
            let is_output_text = p
                .get("type")
                .and_then(Value::as_str)
                .is_some_and(|t| t == "output_text");
            if !is_output_text {
                continue;
            }
            if let Some(s) = p.get("text").and_then(Value::as_str) {
                collected.push(s.to_string());
            } else if let Some(s) = p
                .get("text")
                .and_then(|t| t.get("value"))
                .and_then(Value::as_str)
            {
                collected.push(s.to_string());
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n").trim().to_string())
    }
}

#[async_trait]
impl TextSummarizer for LlmClient {
    async fn summarize(&self, text: &str) -> Result<String, RelayError> {
        let prompt = self.build_prompt(text);
        self.generate_summary(prompt).await
    }
}
