use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static RAW_URL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s"'<>]+"#).ok());

/// Returns the first `http(s)://` link in `text`.
///
/// The link runs until whitespace, a quote or an angle bracket, so links inside
/// HTML attributes like `href="..."` come out without the surrounding markup.
#[must_use]
pub fn first_link(text: &str) -> Option<&str> {
    RAW_URL_RE
        .as_ref()
        .and_then(|re| re.find(text))
        .map(|m| m.as_str())
}

/// Whether `link` points at `domain` or one of its subdomains.
#[must_use]
pub fn is_on_domain(link: &str, domain: &str) -> bool {
    let Ok(url) = Url::parse(link) else {
        return false;
    };
    let Some(host) = url.host_str().map(str::to_ascii_lowercase) else {
        return false;
    };
    let domain = domain.trim().trim_start_matches('.').to_ascii_lowercase();
    host == domain || host.ends_with(&format!(".{domain}"))
}
