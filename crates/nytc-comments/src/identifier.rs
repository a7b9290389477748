//! Article identifier extraction.
//!
//! Two strategies exist. Pattern matching reads the identifier straight out
//! of the URL and never touches the network. Metadata extraction fetches the
//! page and looks for a UUID-bearing canonical URL in JSON-LD, then in the
//! social-sharing `og:url` / `twitter:url` meta tags.

use std::sync::LazyLock;

use nytc_core::{ArticleId, IdStrategy};
use regex::Regex;
use serde_json::Value;

use crate::client::CommentsClient;
use crate::html::{find_meta_content, json_ld_blocks};

static ARTICLE_UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)article/([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})")
        .expect("valid article uuid regex")
});
static DATE_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}/\d{2}/\d{2}/[^?#]+?)(?:\.html)?/?(?:[?#]|$)")
        .expect("valid date slug regex")
});
static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{5,}").expect("valid digit run regex"));
static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
        .expect("valid uuid regex")
});

/// Extracts an identifier from the URL alone.
///
/// Tries, in order, a UUID following `article/`, a `YYYY/MM/DD/slug` path and
/// any run of five or more digits. The first match wins. Only the path and
/// query are searched when the URL parses, so host names and ports never
/// match.
#[must_use]
pub fn extract_from_url(url: &str) -> Option<ArticleId> {
    let haystack = searchable_part(url);

    if let Some(cap) = ARTICLE_UUID_RE.captures(&haystack) {
        return cap.get(1).map(|m| ArticleId::new(m.as_str()));
    }
    if let Some(cap) = DATE_SLUG_RE.captures(&haystack) {
        return cap.get(1).map(|m| ArticleId::new(m.as_str()));
    }
    DIGIT_RUN_RE
        .find(&haystack)
        .map(|m| ArticleId::new(m.as_str()))
}

fn searchable_part(url: &str) -> String {
    match reqwest::Url::parse(url.trim()) {
        Ok(parsed) => match parsed.query() {
            Some(query) => format!("{}?{query}", parsed.path()),
            None => parsed.path().to_string(),
        },
        Err(_) => url.trim().to_string(),
    }
}

/// Extracts an identifier from fetched article HTML.
///
/// Looks for a `NewsArticle` JSON-LD entry whose canonical URL contains a
/// UUID, then falls back to the `og:url` and `twitter:url` meta tags.
#[must_use]
pub fn extract_from_metadata(html: &str) -> Option<ArticleId> {
    for raw in json_ld_blocks(html) {
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            tracing::debug!("skipping unparseable JSON-LD block");
            continue;
        };
        if let Some(id) = find_news_article_uuid(&value) {
            return Some(id);
        }
    }

    find_meta_content(html, "property", "og:url")
        .or_else(|| find_meta_content(html, "name", "twitter:url"))
        .or_else(|| find_meta_content(html, "property", "twitter:url"))
        .and_then(|url| first_uuid(&url))
}

fn find_news_article_uuid(value: &Value) -> Option<ArticleId> {
    match value {
        Value::Object(map) => {
            if is_news_article(map.get("@type")) {
                let canonical = ["url", "@id", "mainEntityOfPage"]
                    .iter()
                    .filter_map(|key| map.get(*key))
                    .find_map(canonical_url_uuid);
                if canonical.is_some() {
                    return canonical;
                }
            }
            map.values().find_map(find_news_article_uuid)
        }
        Value::Array(items) => items.iter().find_map(find_news_article_uuid),
        _ => None,
    }
}

fn canonical_url_uuid(value: &Value) -> Option<ArticleId> {
    match value {
        Value::String(s) => first_uuid(s),
        Value::Object(map) => map.get("@id").and_then(Value::as_str).and_then(first_uuid),
        _ => None,
    }
}

fn is_news_article(node_type: Option<&Value>) -> bool {
    match node_type {
        Some(Value::String(s)) => s.eq_ignore_ascii_case("NewsArticle"),
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(Value::as_str)
            .any(|s| s.eq_ignore_ascii_case("NewsArticle")),
        _ => false,
    }
}

fn first_uuid(text: &str) -> Option<ArticleId> {
    UUID_RE.find(text).map(|m| ArticleId::new(m.as_str()))
}

impl CommentsClient {
    /// Fetches the article page and extracts an identifier from its metadata.
    ///
    /// Returns `None` when the fetch fails or the page carries no usable
    /// metadata. Fetch failures are logged, not returned.
    pub async fn extract_identifier_from_page(&self, url: &str) -> Option<ArticleId> {
        match self.fetch_page(url).await {
            Ok(html) => {
                let id = extract_from_metadata(&html);
                if id.is_none() {
                    tracing::debug!(url, "page metadata has no article identifier");
                }
                id
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "metadata fetch failed");
                None
            }
        }
    }

    /// Extracts an identifier using the given strategy order.
    pub async fn extract_identifier(&self, url: &str, strategy: IdStrategy) -> Option<ArticleId> {
        let id = match strategy {
            IdStrategy::Pattern => extract_from_url(url),
            IdStrategy::Metadata => self.extract_identifier_from_page(url).await,
            IdStrategy::PatternThenMetadata => match extract_from_url(url) {
                Some(id) => Some(id),
                None => self.extract_identifier_from_page(url).await,
            },
        };
        tracing::debug!(url, %strategy, identifier = ?id, "identifier extraction finished");
        id
    }
}

#[cfg(test)]
#[path = "identifier_test.rs"]
mod tests;
