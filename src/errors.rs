use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to read notification: {0}")]
    TransportError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Unexpected status {status} for {target}")]
    UpstreamStatus { target: String, status: u16 },

    #[error("Failed to decode response for {target}: {message}")]
    DecodeError { target: String, message: String },

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("No link in message: {0}")]
    NoLink(String),

    #[error("Thread link doesn't fit to format: {0}")]
    ThreadFormat(String),

    #[error("Can't get summary for {link}: {source}")]
    Summary {
        link: String,
        #[source]
        source: Box<RelayError>,
    },

    #[error("Can't get comments for {link}: {source}")]
    Comments {
        link: String,
        #[source]
        source: Box<RelayError>,
    },

    #[error("Failed to access Telegram API: {0}")]
    ChatError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Summary cache error: {0}")]
    CacheError(String),
}

impl RelayError {
    /// Wraps a failure from the summarization path with the link it was for.
    #[must_use]
    pub fn summary(link: &str, source: RelayError) -> Self {
        RelayError::Summary {
            link: link.to_string(),
            source: Box::new(source),
        }
    }

    /// Wraps a failure from the comment service with the thread it was for.
    #[must_use]
    pub fn comments(link: &str, source: RelayError) -> Self {
        RelayError::Comments {
            link: link.to_string(),
            source: Box::new(source),
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::HttpError(error.to_string())
    }
}

impl From<std::io::Error> for RelayError {
    fn from(error: std::io::Error) -> Self {
        RelayError::TransportError(error.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::DecodeError {
            target: "json".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<anyhow::Error> for RelayError {
    fn from(error: anyhow::Error) -> Self {
        RelayError::ConfigError(error.to_string())
    }
}
