//! Structured retriever: one persisted GraphQL query per article.

use nytc_core::{ArticleId, Comment};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::json;

use crate::client::CommentsClient;
use crate::error::{CommentsError, ErrorKind};
use crate::normalize::{build_comment, RawFields};
use crate::types::{CommentEdge, GraphqlResponse};

pub const OPERATION_NAME: &str = "ArticleCommentsQuery";
pub const PERSISTED_QUERY_HASH: &str =
    "7e3a4f1b9c2d8e605a1f4b3c9d7e2a8f6b0c5d1e3f7a9b2c4d6e8f0a1b3c5d7e";

pub(crate) const PAGE_SIZE: u32 = 100;
pub(crate) const REPLIES_DEPTH: u32 = 3;

const APP_TYPE: &str = "project-vi";
const APP_VERSION: &str = "0.0.5";
const REFERER: &str = "https://www.nytimes.com/";

/// Builds the GET URL for the comments query.
///
/// The identifier and the fixed paging options travel in a percent-encoded
/// `variables` JSON parameter; the persisted query identity travels in
/// `extensions`.
pub(crate) fn build_query_url(endpoint: &str, identifier: &ArticleId) -> String {
    let variables = json!({
        "id": identifier.as_str(),
        "first": PAGE_SIZE,
        "sort": "NEWEST",
        "repliesDepth": REPLIES_DEPTH,
        "view": "ALL",
    });
    let extensions = json!({
        "persistedQuery": {
            "version": 1,
            "sha256Hash": PERSISTED_QUERY_HASH,
        }
    });

    let variables = utf8_percent_encode(&variables.to_string(), NON_ALPHANUMERIC).to_string();
    let extensions = utf8_percent_encode(&extensions.to_string(), NON_ALPHANUMERIC).to_string();
    let separator = if endpoint.contains('?') { '&' } else { '?' };

    format!(
        "{endpoint}{separator}operationName={OPERATION_NAME}&variables={variables}&extensions={extensions}"
    )
}

/// Flattens a structured endpoint response into comments.
///
/// Malformed edges, edges whose node is missing, and comments lacking a body
/// or timestamp are skipped. Zero edges is a valid, empty result.
///
/// # Errors
///
/// - [`CommentsError::Deserialize`] if the body is not JSON of the expected shape.
/// - [`CommentsError::Graphql`] if the endpoint reported errors and no data.
/// - [`CommentsError::MissingField`] if `data.article.comments.edges` is absent.
pub(crate) fn parse_structured_response(body: &str) -> Result<Vec<Comment>, CommentsError> {
    let response: GraphqlResponse =
        serde_json::from_str(body).map_err(|e| CommentsError::Deserialize {
            context: "structured comments response".to_string(),
            source: e,
        })?;

    let Some(data) = response.data else {
        let messages = response
            .errors
            .unwrap_or_default()
            .into_iter()
            .filter_map(|e| e.message)
            .collect::<Vec<_>>();
        if messages.is_empty() {
            return Err(CommentsError::MissingField("data"));
        }
        return Err(CommentsError::Graphql(messages.join("; ")));
    };

    let edges = data
        .article
        .ok_or(CommentsError::MissingField("data.article"))?
        .comments
        .ok_or(CommentsError::MissingField("data.article.comments"))?
        .edges
        .ok_or(CommentsError::MissingField("data.article.comments.edges"))?;

    let edge_count = edges.len();
    let comments: Vec<Comment> = edges
        .iter()
        .filter_map(|value| match CommentEdge::deserialize(value) {
            Ok(edge) => Some(edge),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed structured edge");
                None
            }
        })
        .filter_map(|edge| edge.node?.comment)
        .filter_map(|raw| {
            build_comment(&RawFields {
                author: raw.author.as_ref().and_then(|a| a.name.as_deref()),
                body: raw.text.as_deref(),
                created_at: raw.accepted_at.as_ref(),
                recommendations: raw.recommended_count.as_ref(),
                editor_selected: raw.times_pick.as_ref(),
            })
        })
        .collect();

    if comments.len() < edge_count {
        tracing::debug!(
            edges = edge_count,
            kept = comments.len(),
            "dropped structured comments missing body or timestamp"
        );
    }

    Ok(comments)
}

impl CommentsClient {
    /// Queries the structured endpoint for an article's comments.
    ///
    /// # Errors
    ///
    /// - [`CommentsError::Http`] on network failure.
    /// - [`CommentsError::UnexpectedStatus`] on any non-2xx status.
    /// - Any error from parsing the response (see module docs).
    pub async fn try_fetch_structured(
        &self,
        identifier: &ArticleId,
    ) -> Result<Vec<Comment>, CommentsError> {
        let url = build_query_url(&self.graphql_url, identifier);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header("nyt-app-type", APP_TYPE)
            .header("nyt-app-version", APP_VERSION)
            .header(reqwest::header::REFERER, REFERER)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CommentsError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.graphql_url.clone(),
            });
        }

        let body = response.text().await?;
        parse_structured_response(&body)
    }

    /// Queries the structured endpoint, returning an empty collection on any
    /// failure. Failures are logged.
    pub async fn fetch_structured(&self, identifier: &ArticleId) -> Vec<Comment> {
        match self.try_fetch_structured(identifier).await {
            Ok(comments) => {
                tracing::debug!(
                    identifier = %identifier,
                    count = comments.len(),
                    "structured retrieval finished"
                );
                comments
            }
            Err(e) => {
                match e.kind() {
                    ErrorKind::NotFound => {
                        tracing::info!(identifier = %identifier, error = %e, "structured source has no comments");
                    }
                    ErrorKind::Upstream => {
                        tracing::warn!(identifier = %identifier, error = %e, "structured retrieval failed");
                    }
                }
                Vec::new()
            }
        }
    }
}
