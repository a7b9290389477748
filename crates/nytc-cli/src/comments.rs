use nytc_comments::CommentsClient;
use nytc_core::{AppConfig, ArticleId, EnrichedComment, IdStrategy, SourceKind};
use nytc_sentiment::{ChartPoint, LexiconScorer, PolarityScorer, SentimentSummary};
use serde::Serialize;

use crate::OutputFormat;

const BODY_PREVIEW_CHARS: usize = 60;
const AUTHOR_PREVIEW_CHARS: usize = 18;

/// Everything `comments --format json` prints.
#[derive(Debug, Serialize)]
pub(crate) struct CommentsReport<'a> {
    url: &'a str,
    identifier: Option<&'a ArticleId>,
    source: Option<SourceKind>,
    summary: SentimentSummary,
    points: Vec<ChartPoint>,
    comments: &'a [EnrichedComment],
}

/// Retrieve, enrich, and print the comments of one article.
///
/// An article without comments is not an error: the table view prints a
/// message and the JSON view prints a report with empty collections.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or JSON output fails
/// to serialize.
pub(crate) async fn run_comments(
    config: &AppConfig,
    url: &str,
    format: OutputFormat,
    limit: usize,
) -> anyhow::Result<()> {
    let client = CommentsClient::new(config)?;
    let retrieval = client.retrieve_detailed(url).await;
    tracing::debug!(
        url,
        count = retrieval.comments.len(),
        ?format,
        "retrieval finished; scoring comments"
    );
    let enriched = nytc_sentiment::enrich_with_lexicon(&retrieval.comments);

    let report = CommentsReport {
        url: url.trim(),
        identifier: retrieval.identifier.as_ref(),
        source: retrieval.source,
        summary: nytc_sentiment::summarize(&enriched),
        points: nytc_sentiment::chart_points(&enriched),
        comments: &enriched,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_table(&report, limit),
    }

    Ok(())
}

fn print_table(report: &CommentsReport<'_>, limit: usize) {
    if report.comments.is_empty() {
        println!("No comments found for this article.");
        return;
    }

    let summary = &report.summary;
    println!(
        "{} comments via {} (identifier: {})",
        summary.count,
        report
            .source
            .map_or_else(|| "unknown".to_string(), |s| s.to_string()),
        report.identifier.map_or("none", ArticleId::as_str),
    );
    println!(
        "mean polarity {:+.3}  positive {}  neutral {}  negative {}  editor picks {}",
        summary.mean_polarity,
        summary.positive,
        summary.neutral,
        summary.negative,
        summary.editor_selected,
    );
    println!();

    let mut rows: Vec<&EnrichedComment> = report.comments.iter().collect();
    rows.sort_by(|a, b| b.comment.created_at.cmp(&a.comment.created_at));

    println!(
        "{:<18}{:<20}{:>7}{:>9}  {:<5}BODY",
        "CREATED", "AUTHOR", "LIKES", "POLARITY", "PICK"
    );
    for row in rows.iter().take(limit) {
        let comment = &row.comment;
        println!(
            "{:<18}{:<20}{:>7}{:>+9.3}  {:<5}{}",
            comment.created_at.format("%Y-%m-%d %H:%M"),
            truncate(&comment.author_display_name, AUTHOR_PREVIEW_CHARS),
            comment.recommendation_count,
            row.sentiment_polarity,
            if comment.is_editor_selected { "*" } else { "" },
            truncate(&comment.body.replace(['\n', '\r'], " "), BODY_PREVIEW_CHARS),
        );
    }
    if rows.len() > limit {
        println!("... {} more (use --limit or --format json)", rows.len() - limit);
    }
}

/// Print the identifier extracted from `url` with `strategy`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub(crate) async fn run_identifier(
    config: &AppConfig,
    url: &str,
    strategy: IdStrategy,
) -> anyhow::Result<()> {
    let client = CommentsClient::new(config)?;
    match client.extract_identifier(url.trim(), strategy).await {
        Some(id) => println!("{id}"),
        None => println!("no identifier found ({strategy})"),
    }
    Ok(())
}

/// Print the lexicon polarity of `text`.
///
/// # Errors
///
/// Returns an error if `text` is blank.
pub(crate) fn run_score(text: &str) -> anyhow::Result<()> {
    let polarity = LexiconScorer.polarity(text)?;
    println!("{polarity:+.3}");
    Ok(())
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}
