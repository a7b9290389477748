use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display name used when upstream omits the comment author.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A reader comment normalized from either comment source.
///
/// Every comment carries an author, a body and a timestamp; retrievers drop
/// upstream records missing the body or timestamp rather than building a
/// partial `Comment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author_display_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    /// Reader recommendations ("likes"). Zero when upstream omits the count.
    pub recommendation_count: u32,
    /// `true` when the comment was picked by the newsroom.
    pub is_editor_selected: bool,
}

/// A [`Comment`] paired with its sentiment polarity in `[-1.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedComment {
    #[serde(flatten)]
    pub comment: Comment,
    pub sentiment_polarity: f32,
}

/// Opaque article key used to query the structured comments endpoint.
///
/// Holds a UUID, a `YYYY/MM/DD/slug` path or a long digit run depending on
/// which extraction strategy matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which retrieval strategy produced a comment collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Structured,
    Scraping,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Structured => write!(f, "structured"),
            SourceKind::Scraping => write!(f, "scraping"),
        }
    }
}
