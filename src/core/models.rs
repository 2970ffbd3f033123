use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a discussion comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CommentUser {
    pub name: String,
    pub admin: bool,
    pub verified: bool,
    pub paid_sub: bool,
}

/// A single entry of a discussion thread as returned by the comment service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Comment {
    #[serde(rename = "pid")]
    pub parent_id: String,
    pub text: String,
    /// Raw unsanitized source of the comment. Never rendered.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub orig: String,
    pub user: CommentUser,
    pub score: i64,
    #[serde(rename = "delete")]
    pub deleted: bool,
    #[serde(rename = "time")]
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_empty()
    }
}

/// Cached enrichment result for one link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryItem {
    #[serde(alias = "Title", default)]
    pub title: String,
    #[serde(alias = "Content", default)]
    pub body: String,
}

impl SummaryItem {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// An item missing either part is unusable: it is never cached or rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() || self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_decodes_service_field_names() {
        let raw = r#"{
            "pid": "",
            "text": "<p>hello</p>",
            "orig": "hello",
            "user": {"name": "User1", "admin": true, "paid_sub": true},
            "score": -3,
            "delete": true,
            "time": "2023-04-04T10:00:00Z"
        }"#;
        let comment: Comment = serde_json::from_str(raw).unwrap();
        assert!(comment.is_top_level());
        assert!(comment.deleted);
        assert_eq!(comment.score, -3);
        assert_eq!(comment.user.name, "User1");
        assert!(comment.user.admin);
        assert!(!comment.user.verified);
        assert!(comment.user.paid_sub);
    }

    #[test]
    fn summary_item_with_blank_part_is_empty() {
        assert!(SummaryItem::new("", "body").is_empty());
        assert!(SummaryItem::new("title", "").is_empty());
        assert!(!SummaryItem::new("title", "body").is_empty());
    }
}
