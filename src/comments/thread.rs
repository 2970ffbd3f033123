use regex::Regex;

use crate::errors::RelayError;
use crate::utils::links::is_on_domain;

/// Link to a discussion thread that passed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadLink(String);

impl ThreadLink {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ThreadLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recognizes links on the thread-hosting domain and validates their shape.
///
/// A valid thread references a numbered "prep" article, e.g.
/// `https://radio-t.com/p/2023/04/04/prep-853/`.
#[derive(Debug, Clone)]
pub struct ThreadPattern {
    host: String,
    shape: Regex,
}

impl ThreadPattern {
    pub fn new(host: &str) -> Result<Self, RelayError> {
        let host = host.trim().to_string();
        let shape = Regex::new(&format!(
            r#"^https?://{}/p/[^\s"'<>]+/prep-[0-9]+/"#,
            regex::escape(&host)
        ))
        .map_err(|e| RelayError::ConfigError(format!("thread host {host}: {e}")))?;
        Ok(Self { host, shape })
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn is_thread_host(&self, link: &str) -> bool {
        is_on_domain(link, &self.host)
    }

    pub fn parse(&self, link: &str) -> Result<ThreadLink, RelayError> {
        if self.shape.is_match(link) {
            Ok(ThreadLink(link.to_string()))
        } else {
            Err(RelayError::ThreadFormat(link.to_string()))
        }
    }
}
