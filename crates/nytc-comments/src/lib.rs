//! Comment retrieval for news articles.
//!
//! [`CommentsClient::retrieve`] extracts an article identifier, queries the
//! structured comments endpoint, and falls back to comments embedded in the
//! article page. Every failure is contained: callers always receive a
//! (possibly empty) collection.

pub mod client;
pub mod error;
pub mod identifier;
pub mod retrieve;
pub mod scraping;
pub mod source;
pub mod structured;

mod html;
mod normalize;
mod types;

pub use client::CommentsClient;
pub use error::{CommentsError, ErrorKind};
pub use identifier::{extract_from_metadata, extract_from_url};
pub use retrieve::Retrieval;
pub use source::{fallback_chain, CommentSource};
