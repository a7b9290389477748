use super::*;

const UUID: &str = "123e4567-e89b-12d3-a456-426614174000";

// -----------------------------------------------------------------------
// extract_from_url
// -----------------------------------------------------------------------

#[test]
fn uuid_after_article_segment_is_returned_exactly() {
    let url = format!("https://www.nytimes.com/interactive/article/{UUID}");
    assert_eq!(extract_from_url(&url), Some(ArticleId::new(UUID)));
}

#[test]
fn uppercase_uuid_is_preserved_verbatim() {
    let upper = UUID.to_uppercase();
    let url = format!("https://www.nytimes.com/article/{upper}?smid=url-share");
    assert_eq!(extract_from_url(&url), Some(ArticleId::new(upper)));
}

#[test]
fn uuid_wins_over_date_slug() {
    let url = format!("https://www.nytimes.com/2024/01/15/article/{UUID}");
    assert_eq!(extract_from_url(&url), Some(ArticleId::new(UUID)));
}

#[test]
fn date_slug_drops_html_suffix_and_query() {
    let url = "https://www.nytimes.com/2024/01/15/us/politics/budget-vote.html?smid=nytcore-ios-share";
    assert_eq!(
        extract_from_url(url),
        Some(ArticleId::new("2024/01/15/us/politics/budget-vote"))
    );
}

#[test]
fn date_slug_ignores_trailing_slash() {
    let url = "https://www.nytimes.com/2023/11/02/opinion/letters/";
    assert_eq!(
        extract_from_url(url),
        Some(ArticleId::new("2023/11/02/opinion/letters"))
    );
}

#[test]
fn digit_run_is_last_resort() {
    let url = "https://www.nytimes.com/video/world/100000009321123/clip.html";
    assert_eq!(extract_from_url(url), Some(ArticleId::new("100000009321123")));
}

#[test]
fn short_digit_runs_do_not_match() {
    assert_eq!(extract_from_url("https://www.nytimes.com/section/1234/world"), None);
}

#[test]
fn port_numbers_are_not_identifiers() {
    assert_eq!(extract_from_url("http://127.0.0.1:54321/opinion/letters"), None);
}

#[test]
fn unparseable_input_is_searched_as_is() {
    assert_eq!(
        extract_from_url("nytimes article 9876543"),
        Some(ArticleId::new("9876543"))
    );
}

#[test]
fn url_without_pattern_returns_none() {
    assert_eq!(extract_from_url("https://www.nytimes.com/section/opinion"), None);
}

// -----------------------------------------------------------------------
// extract_from_metadata
// -----------------------------------------------------------------------

#[test]
fn json_ld_news_article_url_yields_uuid() {
    let html = format!(
        r#"<html><head>
        <script type="application/ld+json">{{"@type":"Organization","url":"https://www.nytimes.com/"}}</script>
        <script type="application/ld+json">{{"@context":"https://schema.org","@type":"NewsArticle","url":"nyt://article/{UUID}"}}</script>
        </head></html>"#
    );
    assert_eq!(extract_from_metadata(&html), Some(ArticleId::new(UUID)));
}

#[test]
fn json_ld_graph_and_main_entity_are_searched() {
    let html = format!(
        r#"<script type="application/ld+json">{{
            "@graph": [
                {{"@type": "WebPage", "url": "https://www.nytimes.com/x"}},
                {{"@type": ["NewsArticle", "Article"], "mainEntityOfPage": {{"@id": "https://www.nytimes.com/article/{UUID}"}}}}
            ]
        }}</script>"#
    );
    assert_eq!(extract_from_metadata(&html), Some(ArticleId::new(UUID)));
}

#[test]
fn news_article_without_uuid_falls_back_to_og_url() {
    let html = format!(
        r#"<script type="application/ld+json">{{"@type":"NewsArticle","url":"https://www.nytimes.com/2024/01/15/us/x.html"}}</script>
        <meta property="og:url" content="https://www.nytimes.com/article/{UUID}">"#
    );
    assert_eq!(extract_from_metadata(&html), Some(ArticleId::new(UUID)));
}

#[test]
fn twitter_url_meta_is_last_fallback() {
    let html = format!(r#"<meta name="twitter:url" content="https://nyti.ms/article/{UUID}">"#);
    assert_eq!(extract_from_metadata(&html), Some(ArticleId::new(UUID)));
}

#[test]
fn malformed_json_ld_is_skipped() {
    let html = format!(
        r#"<script type="application/ld+json">{{ not json </script>
        <meta property="og:url" content="https://www.nytimes.com/article/{UUID}">"#
    );
    assert_eq!(extract_from_metadata(&html), Some(ArticleId::new(UUID)));
}

#[test]
fn page_without_metadata_returns_none() {
    let html = r#"<html><head><meta property="og:title" content="Hello"></head></html>"#;
    assert_eq!(extract_from_metadata(html), None);
}
