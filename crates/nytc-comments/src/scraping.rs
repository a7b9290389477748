//! Scraping retriever: comments embedded in the article page itself.
//!
//! The page ships its comment payload inside
//! `<script id="js-article-comments">` as an assignment to
//! `window.__preloadedData`.

use std::sync::LazyLock;

use nytc_core::Comment;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::client::CommentsClient;
use crate::error::{CommentsError, ErrorKind};
use crate::html::find_script_by_id;
use crate::normalize::{build_comment, RawFields};
use crate::types::PreloadedComment;

pub const COMMENTS_SCRIPT_ID: &str = "js-article-comments";

static PRELOADED_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)window\.__preloadedData\s*=\s*(\{.*?\});").expect("valid preloaded data regex")
});

/// Extracts comments from raw article HTML.
///
/// # Errors
///
/// - [`CommentsError::CommentsScriptMissing`] if the page has no comments script.
/// - [`CommentsError::PreloadedDataMissing`] if the script has no data assignment.
/// - [`CommentsError::Deserialize`] if the embedded object is not valid JSON.
/// - [`CommentsError::MissingField`] if the data has no `comments` array.
pub(crate) fn parse_article_page(html: &str) -> Result<Vec<Comment>, CommentsError> {
    let script = find_script_by_id(html, COMMENTS_SCRIPT_ID)
        .ok_or(CommentsError::CommentsScriptMissing)?;
    let data = extract_preloaded_data(script)?;
    let raw_comments = find_comments_array(&data).ok_or(CommentsError::MissingField("comments"))?;

    let total = raw_comments.len();
    let comments: Vec<Comment> = raw_comments
        .iter()
        .filter_map(|value| match PreloadedComment::deserialize(value) {
            Ok(raw) => Some(raw),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed embedded comment");
                None
            }
        })
        .filter_map(|raw| {
            build_comment(&RawFields {
                author: raw.user_display_name.as_deref(),
                body: raw.comment_body.as_deref(),
                created_at: raw.create_date.as_ref(),
                recommendations: raw.recommendations.as_ref(),
                editor_selected: raw.editors_selection.as_ref(),
            })
        })
        .collect();

    if comments.len() < total {
        tracing::debug!(
            total,
            kept = comments.len(),
            "dropped embedded comments missing body or timestamp"
        );
    }

    Ok(comments)
}

/// Reads the object assigned to `window.__preloadedData`.
///
/// The minimal match ends at the first `};`, which truncates the object when
/// a string inside it contains `};`. In that case the object is re-read with a
/// streaming deserializer from the same opening brace, which stops exactly at
/// the end of the first complete JSON value.
fn extract_preloaded_data(script: &str) -> Result<Value, CommentsError> {
    let capture = PRELOADED_DATA_RE
        .captures(script)
        .and_then(|cap| cap.get(1))
        .ok_or(CommentsError::PreloadedDataMissing)?;

    // The capture includes the trailing `;`; the object ends one byte earlier.
    let object = &capture.as_str()[..capture.as_str().len() - 1];
    match serde_json::from_str::<Value>(object) {
        Ok(value) => Ok(value),
        Err(first_err) => {
            let rest = &script[capture.start()..];
            serde_json::Deserializer::from_str(rest)
                .into_iter::<Value>()
                .next()
                .and_then(Result::ok)
                .ok_or(CommentsError::Deserialize {
                    context: "window.__preloadedData".to_string(),
                    source: first_err,
                })
        }
    }
}

/// Returns the top-level `comments` array, or the first one nested anywhere
/// below it.
fn find_comments_array(value: &Value) -> Option<&Vec<Value>> {
    let Value::Object(map) = value else {
        return None;
    };
    if let Some(Value::Array(items)) = map.get("comments") {
        return Some(items);
    }
    map.values().find_map(|child| match child {
        Value::Object(_) => find_comments_array(child),
        Value::Array(items) => items.iter().find_map(find_comments_array),
        _ => None,
    })
}

impl CommentsClient {
    /// Fetches the article page and extracts its embedded comments.
    ///
    /// # Errors
    ///
    /// Any page fetch error (network, 404, other non-2xx status) or any error
    /// from locating and parsing the embedded data.
    pub async fn try_fetch_scraped(&self, url: &str) -> Result<Vec<Comment>, CommentsError> {
        let html = self.fetch_page(url).await?;
        parse_article_page(&html)
    }

    /// Fetches embedded comments, returning an empty collection on any
    /// failure. Failures are logged.
    pub async fn fetch_scraped(&self, url: &str) -> Vec<Comment> {
        match self.try_fetch_scraped(url).await {
            Ok(comments) => {
                tracing::debug!(url, count = comments.len(), "scraping retrieval finished");
                comments
            }
            Err(e) => {
                match e.kind() {
                    ErrorKind::NotFound => {
                        tracing::info!(url, error = %e, "page has no embedded comments");
                    }
                    ErrorKind::Upstream => {
                        tracing::warn!(url, error = %e, "scraping retrieval failed");
                    }
                }
                Vec::new()
            }
        }
    }
}
