//! Comment sources and the fallback chain that orders them.

use nytc_core::{ArticleId, Comment, SourceKind};

use crate::client::CommentsClient;

/// One way of obtaining an article's comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentSource {
    /// Persisted query against the structured endpoint.
    Structured(ArticleId),
    /// Data embedded in the article page.
    Scraping(String),
}

impl CommentSource {
    #[must_use]
    pub fn kind(&self) -> SourceKind {
        match self {
            CommentSource::Structured(_) => SourceKind::Structured,
            CommentSource::Scraping(_) => SourceKind::Scraping,
        }
    }
}

/// Orders the sources to try for `url`.
///
/// With an identifier the structured endpoint goes first and the page scrape
/// is the fallback; without one only the scrape is attempted.
#[must_use]
pub fn fallback_chain(url: &str, identifier: Option<&ArticleId>) -> Vec<CommentSource> {
    let mut chain = Vec::with_capacity(2);
    if let Some(id) = identifier {
        chain.push(CommentSource::Structured(id.clone()));
    }
    chain.push(CommentSource::Scraping(url.to_owned()));
    chain
}

impl CommentsClient {
    /// Fetches from a single source. Never fails; errors yield an empty
    /// collection and are logged by the source.
    pub async fn fetch_from(&self, source: &CommentSource) -> Vec<Comment> {
        match source {
            CommentSource::Structured(id) => self.fetch_structured(id).await,
            CommentSource::Scraping(url) => self.fetch_scraped(url).await,
        }
    }
}
