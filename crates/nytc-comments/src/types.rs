//! Upstream comment payload shapes.
//!
//! ## Structured endpoint
//! `data.article.comments.edges[].node.comment`, with `text`, `acceptedAt`
//! (RFC 3339), `recommendedCount`, `timesPick` (a pick counter, occasionally a
//! boolean) and `author.name`. GraphQL failures come back as HTTP 200 with a
//! top-level `errors` array and `data: null`.
//!
//! ## Embedded page data
//! `window.__preloadedData` holds a `comments` array of legacy comment
//! records: `userDisplayName`, `commentBody`, `createDate` (epoch seconds as a
//! string), `recommendations` and `editorsSelection`.
//!
//! Scalars whose type varies between the two are kept as `serde_json::Value`
//! and normalized in `normalize.rs`.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse {
    #[serde(default)]
    pub(crate) data: Option<GraphqlData>,
    #[serde(default)]
    pub(crate) errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlError {
    #[serde(default)]
    pub(crate) message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlData {
    #[serde(default)]
    pub(crate) article: Option<ArticleNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticleNode {
    #[serde(default)]
    pub(crate) comments: Option<CommentConnection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentConnection {
    /// Kept raw so one malformed edge can be skipped without losing the rest.
    pub(crate) edges: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentEdge {
    #[serde(default)]
    pub(crate) node: Option<EdgeNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EdgeNode {
    #[serde(default)]
    pub(crate) comment: Option<StructuredComment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StructuredComment {
    #[serde(default)]
    pub(crate) text: Option<String>,
    #[serde(default)]
    pub(crate) accepted_at: Option<Value>,
    #[serde(default)]
    pub(crate) recommended_count: Option<Value>,
    #[serde(default)]
    pub(crate) times_pick: Option<Value>,
    #[serde(default)]
    pub(crate) author: Option<StructuredAuthor>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StructuredAuthor {
    #[serde(default)]
    pub(crate) name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PreloadedComment {
    #[serde(default)]
    pub(crate) user_display_name: Option<String>,
    #[serde(default)]
    pub(crate) comment_body: Option<String>,
    #[serde(default)]
    pub(crate) create_date: Option<Value>,
    #[serde(default)]
    pub(crate) recommendations: Option<Value>,
    #[serde(default)]
    pub(crate) editors_selection: Option<Value>,
}
