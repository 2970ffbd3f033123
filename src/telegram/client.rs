//! Telegram Bot API client
//!
//! Sends and pins messages in the configured chat with retry logic.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::debug;

use crate::errors::RelayError;

#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    result: Option<Value>,
    description: Option<String>,
}

/// Transport failures, throttling and server errors are worth another attempt.
fn is_transient(error: &RelayError) -> bool {
    matches!(
        error,
        RelayError::HttpError(_) | RelayError::UpstreamStatus { .. }
    )
}

/// Telegram Bot API client bound to a single chat.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    api_url: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new(http: Client, api_url: &str, token: String, chat_id: String) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            chat_id,
        }
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, RelayError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, RelayError>> + Send,
        T: Send,
    {
        // 100ms, 200ms, 400ms before jitter
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(50)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(3);
        RetryIf::spawn(strategy, operation, is_transient).await
    }

    async fn call(&self, method: &str, payload: &Value) -> Result<Value, RelayError> {
        let url = format!("{}/bot{}/{}", self.api_url, self.token, method);
        // the URL carries the bot token, keep it out of errors
        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| RelayError::from(e.without_url()))?;
        let status = response.status();
        if status.is_server_error() || status.as_u16() == 429 {
            return Err(RelayError::UpstreamStatus {
                target: method.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::from(e.without_url()))?;

        let parsed: BotApiResponse =
            serde_json::from_str(&body).map_err(|e| RelayError::DecodeError {
                target: method.to_string(),
                message: e.to_string(),
            })?;

        if !status.is_success() || !parsed.ok {
            return Err(RelayError::ChatError(format!(
                "{} failed with status {}: {}",
                method,
                status.as_u16(),
                parsed.description.unwrap_or_default()
            )));
        }

        Ok(parsed.result.unwrap_or(Value::Null))
    }

    /// Posts `text` to the chat and returns the new message id.
    pub async fn send_message(&self, text: &str, html: bool) -> Result<i64, RelayError> {
        let mut payload = json!({
            "chat_id": self.chat_id,
            "text": text,
            "disable_web_page_preview": true,
        });
        if html {
            payload["parse_mode"] = Value::String("HTML".to_string());
        }

        let result = self
            .with_retry(|| async { self.call("sendMessage", &payload).await })
            .await?;

        let message_id = result
            .get("message_id")
            .and_then(Value::as_i64)
            .ok_or_else(|| RelayError::ChatError("sendMessage returned no message_id".into()))?;
        debug!("Telegram message {} sent", message_id);
        Ok(message_id)
    }

    pub async fn pin_message(&self, message_id: i64) -> Result<(), RelayError> {
        let payload = json!({
            "chat_id": self.chat_id,
            "message_id": message_id,
            "disable_notification": true,
        });
        self.with_retry(|| async { self.call("pinChatMessage", &payload).await })
            .await?;
        Ok(())
    }
}
