//! Rendering of comments and summaries into Telegram-safe HTML.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::core::models::{Comment, SummaryItem};

/// Tags Telegram accepts in `parse_mode=HTML`.
const SUPPORTED_TAGS: &[&str] = &[
    "b", "strong", "i", "em", "u", "ins", "s", "strike", "del", "a", "code", "pre",
    "tg-spoiler", "blockquote",
];

static TAG_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9-]*)([^>]*)>").ok());

static HREF_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"href\s*=\s*"([^"]*)""#).ok());

/// Escapes `<`, `>` and `&` for plain text placed inside Telegram HTML.
#[must_use]
pub fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Reduces comment markup to the subset of HTML Telegram renders.
///
/// Supported tags survive (links keep only `href`), `<br>` becomes a newline
/// and every other tag is dropped while its inner text stays.
#[must_use]
pub fn telegram_supported_html(html: &str) -> String {
    let Some(tag_re) = TAG_RE.as_ref() else {
        return escape_html(html);
    };

    let converted = tag_re.replace_all(html, |caps: &Captures| {
        let closing = &caps[1];
        let name = caps[2].to_ascii_lowercase();
        let attrs = &caps[3];

        if name == "br" {
            return "\n".to_string();
        }
        if name == "p" {
            return if closing.is_empty() { String::new() } else { "\n".to_string() };
        }
        if !SUPPORTED_TAGS.contains(&name.as_str()) {
            return String::new();
        }
        if name == "a" && closing.is_empty() {
            let href = HREF_RE
                .as_ref()
                .and_then(|re| re.captures(attrs))
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string());
            return match href {
                Some(href) => format!("<a href=\"{href}\">"),
                None => "<a>".to_string(),
            };
        }
        format!("<{closing}{name}>")
    });

    converted.trim().to_string()
}

/// Bold signed score, "от", bold author, then the italic body.
#[must_use]
pub fn render_comment(comment: &Comment) -> String {
    let user = escape_html(&comment.user.name);
    let text = telegram_supported_html(&comment.text);
    format!("<b>{:+}</b> от <b>{}</b>\n<i>{}</i>", comment.score, user, text)
}

/// Title and generated body separated by a blank line.
#[must_use]
pub fn render_summary(item: &SummaryItem) -> String {
    format!("{}\n\n{}", escape_html(&item.title), escape_html(&item.body))
}

/// Inline marker used in place of a summary that could not be produced.
#[must_use]
pub fn render_error(error: &dyn std::fmt::Display) -> String {
    format!("<code>Error: {}</code>", escape_html(&error.to_string()))
}
