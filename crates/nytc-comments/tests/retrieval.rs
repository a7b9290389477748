//! Integration tests for `CommentsClient` retrieval.
//!
//! Uses `wiremock` to serve both the structured comments endpoint and the
//! article pages, so no real network traffic is made.

use nytc_comments::{CommentsClient, CommentsError};
use nytc_core::{AppConfig, ArticleId, IdStrategy, SourceKind};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UUID: &str = "123e4567-e89b-12d3-a456-426614174000";

fn test_client(server: &MockServer, strategy: IdStrategy) -> CommentsClient {
    let config = AppConfig {
        request_timeout_secs: 5,
        user_agent: "nytc-test/0.1".to_string(),
        graphql_url: format!("{}/graphql", server.uri()),
        id_strategy: strategy,
        ..AppConfig::default()
    };
    CommentsClient::new(&config).expect("failed to build test CommentsClient")
}

fn structured_body(texts: &[&str]) -> Value {
    let edges: Vec<Value> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            json!({
                "node": {
                    "comment": {
                        "text": text,
                        "acceptedAt": format!("2024-03-01T12:{i:02}:00Z"),
                        "recommendedCount": i * 10,
                        "timesPick": if i == 0 { 1 } else { 0 },
                        "author": { "name": format!("Reader {i}") }
                    }
                }
            })
        })
        .collect();
    json!({ "data": { "article": { "comments": { "edges": edges } } } })
}

fn article_page(bodies: &[&str], og_url: Option<&str>) -> String {
    let comments: Vec<Value> = bodies
        .iter()
        .map(|body| {
            json!({
                "userDisplayName": "Scraped Reader",
                "commentBody": body,
                "createDate": "1709296200",
                "recommendations": "7",
                "editorsSelection": false
            })
        })
        .collect();
    let data = json!({ "comments": comments });
    let meta = og_url
        .map(|u| format!(r#"<meta property="og:url" content="{u}">"#))
        .unwrap_or_default();
    format!(
        r#"<html><head>{meta}</head><body>
        <script id="js-article-comments">window.__preloadedData = {data};</script>
        </body></html>"#
    )
}

async fn mount_graphql(server: &MockServer, body: &Value) {
    Mock::given(method("GET"))
        .and(path("/graphql"))
        .and(query_param("operationName", "ArticleCommentsQuery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, page_path: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Structured retriever
// ---------------------------------------------------------------------------

#[tokio::test]
async fn structured_fetch_maps_every_edge() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graphql"))
        .and(header("nyt-app-type", "project-vi"))
        .and(header("nyt-app-version", "0.0.5"))
        .and(header("referer", "https://www.nytimes.com/"))
        .and(header("user-agent", "nytc-test/0.1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(structured_body(&["a", "b", "c"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, IdStrategy::Pattern);
    let comments = client
        .try_fetch_structured(&ArticleId::new(UUID))
        .await
        .expect("structured fetch should succeed");

    assert_eq!(comments.len(), 3);
    assert_eq!(comments[0].body, "a");
    assert_eq!(comments[0].author_display_name, "Reader 0");
    assert!(comments[0].is_editor_selected);
    assert_eq!(comments[2].recommendation_count, 20);
    assert!(!comments[2].is_editor_selected);
}

#[tokio::test]
async fn structured_fetch_soft_fails_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server, IdStrategy::Pattern);
    let id = ArticleId::new(UUID);

    let err = client.try_fetch_structured(&id).await.unwrap_err();
    assert!(
        matches!(err, CommentsError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
    assert!(client.fetch_structured(&id).await.is_empty());
}

#[tokio::test]
async fn structured_fetch_soft_fails_on_unexpected_shape() {
    let server = MockServer::start().await;
    mount_graphql(&server, &json!({ "data": { "article": null } })).await;

    let client = test_client(&server, IdStrategy::Pattern);
    assert!(client.fetch_structured(&ArticleId::new(UUID)).await.is_empty());
}

// ---------------------------------------------------------------------------
// Scraping retriever
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scraped_fetch_returns_embedded_comments() {
    let server = MockServer::start().await;
    mount_page(&server, "/opinion/letters", article_page(&["x", "y"], None)).await;

    let client = test_client(&server, IdStrategy::Pattern);
    let comments = client
        .fetch_scraped(&format!("{}/opinion/letters", server.uri()))
        .await;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].author_display_name, "Scraped Reader");
    assert_eq!(comments[0].recommendation_count, 7);
}

#[tokio::test]
async fn scraped_fetch_without_script_is_empty() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/opinion/letters",
        "<html><body><p>No comments.</p></body></html>".to_string(),
    )
    .await;

    let client = test_client(&server, IdStrategy::Pattern);
    let url = format!("{}/opinion/letters", server.uri());

    let err = client.try_fetch_scraped(&url).await.unwrap_err();
    assert!(matches!(err, CommentsError::CommentsScriptMissing));
    assert!(client.fetch_scraped(&url).await.is_empty());
}

#[tokio::test]
async fn scraped_fetch_reports_missing_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server, IdStrategy::Pattern);
    let url = format!("{}/gone", server.uri());
    let err = client.try_fetch_scraped(&url).await.unwrap_err();
    assert!(matches!(err, CommentsError::NotFound { .. }));
}

// ---------------------------------------------------------------------------
// Identifier extraction
// ---------------------------------------------------------------------------

#[tokio::test]
async fn metadata_strategy_reads_og_url() {
    let server = MockServer::start().await;
    let og = format!("https://www.nytimes.com/article/{UUID}");
    mount_page(&server, "/opinion/letters", article_page(&[], Some(&og))).await;

    let client = test_client(&server, IdStrategy::Metadata);
    let id = client
        .extract_identifier(
            &format!("{}/opinion/letters", server.uri()),
            IdStrategy::Metadata,
        )
        .await;
    assert_eq!(id, Some(ArticleId::new(UUID)));
}

#[tokio::test]
async fn unreachable_metadata_without_pattern_is_absent() {
    let server = MockServer::start().await;
    let client = test_client(&server, IdStrategy::PatternThenMetadata);
    let id = client
        .extract_identifier(
            "http://127.0.0.1:1/opinion/letters",
            IdStrategy::PatternThenMetadata,
        )
        .await;
    assert_eq!(id, None);
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

#[tokio::test]
async fn retrieve_uses_structured_source_when_it_has_comments() {
    let server = MockServer::start().await;
    mount_graphql(&server, &structured_body(&["from api"])).await;
    Mock::given(method("GET"))
        .and(path(format!("/article/{UUID}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_page(&["scraped"], None)))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server, IdStrategy::PatternThenMetadata);
    let result = client
        .retrieve_detailed(&format!("{}/article/{UUID}", server.uri()))
        .await;

    assert_eq!(result.source, Some(SourceKind::Structured));
    assert_eq!(result.identifier, Some(ArticleId::new(UUID)));
    assert_eq!(result.comments.len(), 1);
    assert_eq!(result.comments[0].body, "from api");
}

#[tokio::test]
async fn retrieve_falls_back_to_scraping_when_structured_is_empty() {
    let server = MockServer::start().await;
    mount_graphql(&server, &structured_body(&[])).await;
    mount_page(
        &server,
        &format!("/article/{UUID}"),
        article_page(&["first", "second"], None),
    )
    .await;

    let client = test_client(&server, IdStrategy::Pattern);
    let url = format!("{}/article/{UUID}", server.uri());

    let result = client.retrieve_detailed(&url).await;
    let scraped = client.fetch_scraped(&url).await;

    assert_eq!(result.source, Some(SourceKind::Scraping));
    assert_eq!(result.comments.len(), 2);
    assert_eq!(result.comments, scraped);
}

#[tokio::test]
async fn retrieve_falls_back_to_scraping_when_structured_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    mount_page(&server, &format!("/article/{UUID}"), article_page(&["only"], None)).await;

    let client = test_client(&server, IdStrategy::Pattern);
    let comments = client
        .retrieve(&format!("{}/article/{UUID}", server.uri()))
        .await;

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].body, "only");
}

#[tokio::test]
async fn retrieve_scrapes_directly_without_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(structured_body(&["unused"])))
        .expect(0)
        .mount(&server)
        .await;
    mount_page(&server, "/opinion/letters", article_page(&["scraped"], None)).await;

    let client = test_client(&server, IdStrategy::Pattern);
    let result = client
        .retrieve_detailed(&format!("{}/opinion/letters", server.uri()))
        .await;

    assert_eq!(result.identifier, None);
    assert_eq!(result.source, Some(SourceKind::Scraping));
    assert_eq!(result.comments.len(), 1);
}

#[tokio::test]
async fn retrieve_returns_empty_when_nothing_is_found() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/opinion/letters",
        "<html><body>paywall</body></html>".to_string(),
    )
    .await;

    let client = test_client(&server, IdStrategy::PatternThenMetadata);
    let result = client
        .retrieve_detailed(&format!("{}/opinion/letters", server.uri()))
        .await;

    assert!(result.is_empty());
    assert_eq!(result.source, None);
    assert_eq!(result.identifier, None);
}

#[tokio::test]
async fn retrieve_ignores_blank_input() {
    let server = MockServer::start().await;
    let client = test_client(&server, IdStrategy::PatternThenMetadata);
    assert!(client.retrieve("   ").await.is_empty());
}
