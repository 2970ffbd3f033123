//! Translation table for notifications the bot pins in the chat.

/// Default triggers: the "official cut" announcement becomes a pinned stream notice.
pub const DEFAULT_PINNED: &[(&str, &str)] = &[(
    "⚠️ Официальный кат! - https://stream.radio-t.com/",
    "⚠️ Вещание подкаста началось - https://stream.radio-t.com/",
)];

/// Maps raw notification lines to `(pinned, outgoing text)`.
#[derive(Debug, Clone)]
pub struct PinClassifier {
    table: Vec<(String, String)>,
}

impl Default for PinClassifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_PINNED
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        )
    }
}

impl PinClassifier {
    pub fn new<I>(table: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            table: table.into_iter().collect(),
        }
    }

    /// Matching is case-insensitive on the trimmed line. A blank replacement
    /// relays the trimmed input instead. Lines without a match come back untouched.
    #[must_use]
    pub fn classify(&self, raw: &str) -> (bool, String) {
        let cleaned = raw.trim();
        let cleaned = cleaned.strip_suffix('\n').unwrap_or(cleaned);
        let folded = cleaned.to_lowercase();

        for (trigger, replacement) in &self.table {
            if trigger.trim().to_lowercase() == folded {
                let text = if replacement.trim().is_empty() {
                    cleaned.to_string()
                } else {
                    replacement.clone()
                };
                return (true, text);
            }
        }

        (false, raw.to_string())
    }
}
