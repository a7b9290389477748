//! Sentiment enrichment of comment collections.

use nytc_core::{Comment, EnrichedComment};

use crate::scorer::{LexiconScorer, PolarityScorer};

/// Scores every comment body with `scorer`, preserving order.
///
/// A scorer error or a non-finite score becomes `0.0`; one bad comment never
/// aborts the batch. Scores are clamped to `[-1.0, 1.0]`.
pub fn enrich<S>(scorer: &S, comments: &[Comment]) -> Vec<EnrichedComment>
where
    S: PolarityScorer + ?Sized,
{
    comments
        .iter()
        .map(|comment| EnrichedComment {
            comment: comment.clone(),
            sentiment_polarity: score_one(scorer, &comment.body),
        })
        .collect()
}

/// [`enrich`] with the default [`LexiconScorer`].
#[must_use]
pub fn enrich_with_lexicon(comments: &[Comment]) -> Vec<EnrichedComment> {
    enrich(&LexiconScorer, comments)
}

fn score_one<S>(scorer: &S, body: &str) -> f32
where
    S: PolarityScorer + ?Sized,
{
    match scorer.polarity(body) {
        Ok(score) if score.is_finite() => score.clamp(-1.0, 1.0),
        Ok(score) => {
            tracing::debug!(score, "non-finite polarity treated as neutral");
            0.0
        }
        Err(e) => {
            tracing::debug!(error = %e, "polarity scoring failed; treating as neutral");
            0.0
        }
    }
}
