use std::str::FromStr;

/// Default structured comments endpoint.
pub const DEFAULT_GRAPHQL_URL: &str = "https://samizdat-graphql.nytimes.com/graphql/v2";

/// Desktop browser user agent sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Order in which the identifier extractor tries its strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// URL pattern matching only; never touches the network.
    Pattern,
    /// Page metadata (JSON-LD, then social meta tags) only.
    Metadata,
    /// URL patterns first, page metadata when no pattern matches.
    #[default]
    PatternThenMetadata,
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::Pattern => write!(f, "pattern"),
            IdStrategy::Metadata => write!(f, "metadata"),
            IdStrategy::PatternThenMetadata => write!(f, "pattern-then-metadata"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" => Ok(IdStrategy::Pattern),
            "metadata" => Ok(IdStrategy::Metadata),
            "pattern-then-metadata" | "pattern_then_metadata" => {
                Ok(IdStrategy::PatternThenMetadata)
            }
            other => Err(format!(
                "unknown id strategy \"{other}\" (expected pattern, metadata or pattern-then-metadata)"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub graphql_url: String,
    pub id_strategy: IdStrategy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            id_strategy: IdStrategy::default(),
        }
    }
}
