//! Sentiment scoring for article comments.
//!
//! A [`PolarityScorer`] turns comment text into a polarity in `[-1.0, 1.0]`;
//! [`enrich`] applies it to a whole collection without ever aborting the
//! batch. [`chart_points`] and [`summarize`] shape the enriched collection for
//! display.

pub mod chart;
pub mod enrich;
pub mod error;
pub mod scorer;

pub use chart::{chart_points, summarize, ChartPoint, MarkerSymbol, SentimentSummary};
pub use enrich::{enrich, enrich_with_lexicon};
pub use error::SentimentError;
pub use scorer::{LexiconScorer, PolarityScorer};
