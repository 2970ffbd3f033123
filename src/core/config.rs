use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 18001;
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/responses";
pub const DEFAULT_EXTRACTOR_API_URL: &str = "https://ureadability.radio-t.com/api/content/v1/parser";
pub const DEFAULT_REMARK_API_URL: &str = "https://remark42.radio-t.com/api/v1/find";
pub const DEFAULT_REMARK_SITE: &str = "radiot";
pub const DEFAULT_THREAD_HOST: &str = "radio-t.com";
pub const DEFAULT_SUMMARY_MARKER: &str = "⚠";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub telegram_api_url: String,
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: String,
    pub openai_api_url: String,
    pub extractor_api_url: String,
    pub extractor_token: String,
    pub extractor_title_field: String,
    pub extractor_content_field: String,
    pub remark_api_url: String,
    pub remark_site: String,
    pub thread_host: String,
    pub summary_marker: String,
    pub summary_cache_file: Option<PathBuf>,
    pub comments_include_negative: bool,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            port: parse_var("RTJC_PORT", DEFAULT_PORT)?,
            telegram_token: env::var("TELEGRAM_TOKEN")
                .map_err(|e| format!("TELEGRAM_TOKEN: {}", e))?,
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID")
                .map_err(|e| format!("TELEGRAM_CHAT_ID: {}", e))?,
            telegram_api_url: var_or("TELEGRAM_API_URL", DEFAULT_TELEGRAM_API_URL),
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_org_id: env::var("OPENAI_ORG_ID").ok(),
            openai_model: var_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            openai_api_url: var_or("OPENAI_API_URL", DEFAULT_OPENAI_API_URL),
            extractor_api_url: var_or("EXTRACTOR_API_URL", DEFAULT_EXTRACTOR_API_URL),
            extractor_token: var_or("EXTRACTOR_TOKEN", ""),
            extractor_title_field: var_or("EXTRACTOR_TITLE_FIELD", "Title"),
            extractor_content_field: var_or("EXTRACTOR_CONTENT_FIELD", "Content"),
            remark_api_url: var_or("REMARK_API_URL", DEFAULT_REMARK_API_URL),
            remark_site: var_or("REMARK_SITE", DEFAULT_REMARK_SITE),
            thread_host: var_or("THREAD_HOST", DEFAULT_THREAD_HOST),
            summary_marker: var_or("SUMMARY_MARKER", DEFAULT_SUMMARY_MARKER),
            summary_cache_file: env::var("SUMMARY_CACHE_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            comments_include_negative: parse_var("COMMENTS_INCLUDE_NEGATIVE", false)?,
            http_timeout: Duration::from_secs(parse_var(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_var<T>(name: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| format!("{}: {}", name, e)),
        _ => Ok(default),
    }
}
