//! Retrieval orchestration: identifier extraction followed by the fallback chain.

use nytc_core::{ArticleId, Comment, SourceKind};

use crate::client::CommentsClient;
use crate::source::fallback_chain;

/// Outcome of one retrieval.
#[derive(Debug, Clone, Default)]
pub struct Retrieval {
    pub comments: Vec<Comment>,
    /// Source that produced `comments`; `None` when every source came back empty.
    pub source: Option<SourceKind>,
    pub identifier: Option<ArticleId>,
}

impl Retrieval {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

impl CommentsClient {
    /// Retrieves the comments for an article URL.
    ///
    /// Always returns a collection; an empty one means no source had comments.
    pub async fn retrieve(&self, url: &str) -> Vec<Comment> {
        self.retrieve_detailed(url).await.comments
    }

    /// Retrieves comments and reports which source produced them.
    ///
    /// Extracts an identifier with the configured strategy, then walks the
    /// fallback chain until a source yields at least one comment.
    pub async fn retrieve_detailed(&self, url: &str) -> Retrieval {
        let url = url.trim();
        if url.is_empty() {
            tracing::info!("empty article URL; nothing to retrieve");
            return Retrieval::default();
        }

        let identifier = self.extract_identifier(url, self.id_strategy).await;

        for source in fallback_chain(url, identifier.as_ref()) {
            let comments = self.fetch_from(&source).await;
            if comments.is_empty() {
                tracing::debug!(url, source = %source.kind(), "source returned no comments");
                continue;
            }
            tracing::info!(
                url,
                source = %source.kind(),
                count = comments.len(),
                "retrieved comments"
            );
            return Retrieval {
                comments,
                source: Some(source.kind()),
                identifier,
            };
        }

        tracing::info!(url, identifier = ?identifier, "no comments found");
        Retrieval {
            comments: Vec::new(),
            source: None,
            identifier,
        }
    }
}
