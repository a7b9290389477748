//! Shared data model and configuration for the nytc workspace.

pub mod app_config;
pub mod comment;
pub mod config;
pub mod error;

pub use app_config::{AppConfig, IdStrategy};
pub use comment::{ArticleId, Comment, EnrichedComment, SourceKind, ANONYMOUS_AUTHOR};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
