use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("cannot score empty text")]
    EmptyText,

    #[error("scorer failed: {0}")]
    Scorer(String),
}
