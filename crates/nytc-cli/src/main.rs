mod comments;

use clap::{Parser, Subcommand, ValueEnum};
use nytc_core::IdStrategy;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "nytc-cli")]
#[command(about = "Fetch article comments and score their sentiment")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Retrieve an article's comments, score them, and print the results
    Comments {
        /// Article URL
        url: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Maximum rows in the table preview
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Print the article identifier extracted from a URL
    Id {
        /// Article URL
        url: String,

        /// Extraction strategy (defaults to NYTC_ID_STRATEGY)
        #[arg(long)]
        strategy: Option<IdStrategy>,
    },
    /// Print the sentiment polarity of a piece of text
    Score {
        /// Text to score
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = nytc_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Comments { url, format, limit }) => {
            comments::run_comments(&config, &url, format, limit).await?;
        }
        Some(Commands::Id { url, strategy }) => {
            comments::run_identifier(&config, &url, strategy.unwrap_or(config.id_strategy))
                .await?;
        }
        Some(Commands::Score { text }) => comments::run_score(&text)?,
        None => println!("nytc-cli: pass an article URL to `nytc-cli comments <URL>`"),
    }

    Ok(())
}
