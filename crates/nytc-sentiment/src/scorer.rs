//! Polarity scoring.

use crate::error::SentimentError;

/// Scores a piece of text as a polarity in `[-1.0, 1.0]`.
///
/// Implementations are treated as black boxes by [`crate::enrich`]: an error
/// or a non-finite value is recorded as neutral (`0.0`).
pub trait PolarityScorer {
    /// # Errors
    ///
    /// Implementation-defined; [`LexiconScorer`] rejects empty text.
    fn polarity(&self, text: &str) -> Result<f32, SentimentError>;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> Result<f32, SentimentError>,
{
    fn polarity(&self, text: &str) -> Result<f32, SentimentError> {
        self(text)
    }
}

/// General-commentary word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("wonderful", 1.0),
    ("brilliant", 0.9),
    ("best", 1.0),
    ("better", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("agree", 0.4),
    ("thank", 0.4),
    ("thanks", 0.4),
    ("thoughtful", 0.6),
    ("insightful", 0.7),
    ("fair", 0.5),
    ("hope", 0.3),
    ("hopeful", 0.5),
    ("right", 0.3),
    ("important", 0.4),
    ("beautiful", 0.85),
    ("helpful", 0.5),
    ("honest", 0.6),
    ("smart", 0.5),
    ("happy", 0.8),
    ("glad", 0.5),
    ("refreshing", 0.5),
    ("well", 0.3),
    ("win", 0.6),
    ("success", 0.6),
    // Negative signals
    ("bad", -0.7),
    ("worse", -0.6),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("disgusting", -1.0),
    ("wrong", -0.5),
    ("sad", -0.5),
    ("angry", -0.5),
    ("hate", -0.8),
    ("stupid", -0.8),
    ("ridiculous", -0.7),
    ("shameful", -0.8),
    ("disappointing", -0.6),
    ("dangerous", -0.6),
    ("corrupt", -0.7),
    ("lies", -0.6),
    ("lie", -0.6),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.5),
    ("problem", -0.3),
    ("crisis", -0.4),
    ("fear", -0.4),
    ("unfair", -0.5),
    ("biased", -0.5),
    ("nonsense", -0.6),
    ("pathetic", -0.9),
    ("tragic", -0.7),
];

/// Words that flip the polarity of the next scored word.
const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "hardly", "cannot"];
/// Multiplier applied to a negated word's weight.
const NEGATION_FACTOR: f32 = -0.5;

/// Words that amplify the next scored word.
const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("so", 1.2),
    ("truly", 1.3),
    ("incredibly", 1.5),
];

/// Lexicon scorer.
///
/// Polarity is the mean weight of the matched words, so a comment's length
/// does not push it towards the extremes. A negator (`not`, `never`, any
/// `n't` contraction) immediately before a scored word multiplies its weight
/// by `-0.5`; an intensifier multiplies it by the listed factor. Words that
/// are neither reset any pending negation or intensifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f32, SentimentError> {
        if text.trim().is_empty() {
            return Err(SentimentError::EmptyText);
        }
        Ok(lexicon_score(text))
    }
}

/// Score a text string using the lexicon. Returns `0.0` for text without any
/// lexicon words.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut total = 0.0_f32;
    let mut matched = 0_u32;
    let mut negated = false;
    let mut boost = 1.0_f32;

    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase()
            .replace('\u{2019}', "'");
        if w.is_empty() {
            continue;
        }
        if is_negator(&w) {
            negated = true;
            continue;
        }
        if let Some(&(_, factor)) = INTENSIFIERS.iter().find(|(i, _)| *i == w) {
            boost *= factor;
            continue;
        }

        if let Some(&(_, weight)) = LEXICON.iter().find(|(lex_word, _)| *lex_word == w) {
            let mut value = weight * boost;
            if negated {
                value *= NEGATION_FACTOR;
            }
            total += value;
            matched += 1;
        }
        negated = false;
        boost = 1.0;
    }

    if matched == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = total / matched as f32;
    mean.clamp(-1.0, 1.0)
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}
