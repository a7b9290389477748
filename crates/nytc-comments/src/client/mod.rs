//! HTTP client shared by every comment source.

use std::time::Duration;

use nytc_core::{AppConfig, IdStrategy};
use reqwest::Client;

use crate::error::CommentsError;

/// Entry point for identifier extraction and comment retrieval.
///
/// Holds one `reqwest::Client` configured with the browser user agent and
/// request timeout from [`AppConfig`], plus the structured endpoint URL and
/// identifier strategy. Each retrieval is independent; nothing is cached
/// between calls.
pub struct CommentsClient {
    pub(crate) client: Client,
    pub(crate) graphql_url: String,
    pub(crate) id_strategy: IdStrategy,
}

impl CommentsClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CommentsError::InvalidUrl`] if the
    /// configured endpoint is not an absolute URL.
    pub fn new(config: &AppConfig) -> Result<Self, CommentsError> {
        reqwest::Url::parse(&config.graphql_url).map_err(|e| CommentsError::InvalidUrl {
            url: config.graphql_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            graphql_url: config.graphql_url.clone(),
            id_strategy: config.id_strategy,
        })
    }

    #[must_use]
    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    /// Fetches a page as text.
    ///
    /// # Errors
    ///
    /// - [`CommentsError::InvalidUrl`] if `url` is not an absolute URL.
    /// - [`CommentsError::NotFound`] on HTTP 404.
    /// - [`CommentsError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`CommentsError::Http`] on network or body read failure.
    pub(crate) async fn fetch_page(&self, url: &str) -> Result<String, CommentsError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| CommentsError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CommentsError::NotFound {
                url: url.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(CommentsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}
