/// System prompt for article summaries.
pub const SUMMARY_SYSTEM_PROMPT: &str = "You are a news digest assistant for a tech podcast chat. \
    You receive an article as \"<title> - <text>\". \
    Write a short summary of the article in 3-5 sentences, in the language of the article. \
    Output only the summary text without headings, markup or links.";

/// Max characters of article text sent to the model.
pub const MAX_ARTICLE_CHARS: usize = 12_000;

/// Removes control characters (line breaks stay) and truncates to
/// [`MAX_ARTICLE_CHARS`].
#[must_use]
pub fn sanitize_article_text(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c == '\n' || !c.is_control())
        .take(MAX_ARTICLE_CHARS)
        .collect()
}
