use thiserror::Error;

/// Coarse classification used when reporting a failed retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The article exposes no comment data through this source.
    NotFound,
    /// Network failure, bad status, or a response that does not have the expected shape.
    Upstream,
}

#[derive(Debug, Error)]
pub enum CommentsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("comments endpoint returned errors: {0}")]
    Graphql(String),

    #[error("unexpected response shape: missing {0}")]
    MissingField(&'static str),

    #[error("page has no js-article-comments script")]
    CommentsScriptMissing,

    #[error("comments script has no preloaded data assignment")]
    PreloadedDataMissing,
}

impl CommentsError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommentsError::NotFound { .. }
            | CommentsError::CommentsScriptMissing
            | CommentsError::PreloadedDataMissing => ErrorKind::NotFound,
            CommentsError::Http(_)
            | CommentsError::Deserialize { .. }
            | CommentsError::UnexpectedStatus { .. }
            | CommentsError::InvalidUrl { .. }
            | CommentsError::Graphql(_)
            | CommentsError::MissingField(_) => ErrorKind::Upstream,
        }
    }
}
