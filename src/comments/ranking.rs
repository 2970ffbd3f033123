use crate::core::models::Comment;

/// Which top-level comments take part in ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankingPolicy {
    /// Keep comments with a negative score. Off by default.
    pub include_negative: bool,
}

/// Keeps top-level, non-deleted comments and orders them by score descending,
/// earlier timestamp first on ties. The sort is stable.
#[must_use]
pub fn rank_comments(comments: Vec<Comment>, policy: RankingPolicy) -> Vec<Comment> {
    let mut ranked: Vec<Comment> = comments
        .into_iter()
        .filter(|c| c.is_top_level() && !c.deleted)
        .filter(|c| policy.include_negative || c.score >= 0)
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.timestamp.cmp(&b.timestamp))
    });

    ranked
}
