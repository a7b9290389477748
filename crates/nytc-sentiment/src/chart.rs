//! Chart-ready projection of enriched comments.
//!
//! Each comment becomes one scatter point: time on x, polarity on y, marker
//! size and color driven by recommendations, marker shape by editor
//! selection.

use chrono::{DateTime, Utc};
use nytc_core::EnrichedComment;
use serde::Serialize;

const MIN_MARKER_SIZE: f32 = 10.0;
const MARKER_SIZE_RANGE: f32 = 40.0;
/// Polarities with a smaller magnitude count as neutral in summaries.
const NEUTRAL_BAND: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSymbol {
    Star,
    Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub created_at: DateTime<Utc>,
    pub polarity: f32,
    /// Marker diameter, `10.0` to `50.0`, scaled by recommendations.
    pub marker_size: f32,
    pub color_value: u32,
    pub symbol: MarkerSymbol,
    pub author: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub count: usize,
    pub mean_polarity: f32,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub editor_selected: usize,
    pub total_recommendations: u64,
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
}

/// Projects enriched comments onto scatter points, preserving order.
///
/// Marker size is `10 + 40 * likes / max_likes`; when no comment has any
/// likes every marker gets the minimum size.
#[must_use]
pub fn chart_points(comments: &[EnrichedComment]) -> Vec<ChartPoint> {
    let max_likes = comments
        .iter()
        .map(|c| c.comment.recommendation_count)
        .max()
        .unwrap_or(0);

    comments
        .iter()
        .map(|enriched| {
            let comment = &enriched.comment;
            ChartPoint {
                created_at: comment.created_at,
                polarity: enriched.sentiment_polarity,
                marker_size: marker_size(comment.recommendation_count, max_likes),
                color_value: comment.recommendation_count,
                symbol: if comment.is_editor_selected {
                    MarkerSymbol::Star
                } else {
                    MarkerSymbol::Circle
                },
                author: comment.author_display_name.clone(),
                body: comment.body.clone(),
            }
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn marker_size(likes: u32, max_likes: u32) -> f32 {
    if max_likes == 0 {
        return MIN_MARKER_SIZE;
    }
    MIN_MARKER_SIZE + MARKER_SIZE_RANGE * (likes as f32 / max_likes as f32)
}

#[must_use]
pub fn summarize(comments: &[EnrichedComment]) -> SentimentSummary {
    let count = comments.len();
    let mean_polarity = if count == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let denom = count as f32;
        comments.iter().map(|c| c.sentiment_polarity).sum::<f32>() / denom
    };

    let positive = comments
        .iter()
        .filter(|c| c.sentiment_polarity >= NEUTRAL_BAND)
        .count();
    let negative = comments
        .iter()
        .filter(|c| c.sentiment_polarity <= -NEUTRAL_BAND)
        .count();

    SentimentSummary {
        count,
        mean_polarity,
        positive,
        neutral: count - positive - negative,
        negative,
        editor_selected: comments
            .iter()
            .filter(|c| c.comment.is_editor_selected)
            .count(),
        total_recommendations: comments
            .iter()
            .map(|c| u64::from(c.comment.recommendation_count))
            .sum(),
        earliest: comments.iter().map(|c| c.comment.created_at).min(),
        latest: comments.iter().map(|c| c.comment.created_at).max(),
    }
}
