use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Bearer token for the X API v2 (required for `collect` only)
    pub bearer_token: String,
    /// Cap on how many posts to collect per run (MAX_TWEETS, default 500)
    pub max_posts: usize,
    /// X API base URL (override for testing against a local stub)
    pub api_url: String,
    /// Directory holding the stage CSVs (default ./data)
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the bearer token has no default — it is required for
    /// collection and nothing else.
    pub fn load() -> Result<Self> {
        let max_posts = match env::var("MAX_TWEETS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("MAX_TWEETS is not a number: {raw}"))?,
            Err(_) => 500,
        };

        Ok(Self {
            bearer_token: env::var("TWITTER_BEARER_TOKEN").unwrap_or_default(),
            max_posts,
            api_url: env::var("TWITTER_API_URL")
                .unwrap_or_else(|_| crate::twitter::client::DEFAULT_API_URL.to_string()),
            data_dir: env::var("MOODRING_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
        })
    }

    /// Check that the X API bearer token is configured.
    /// Call this before any operation that talks to the search API.
    pub fn require_twitter(&self) -> Result<()> {
        if self.bearer_token.is_empty() {
            anyhow::bail!(
                "TWITTER_BEARER_TOKEN not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// Stage 1 output: raw collected posts.
    pub fn raw_path(&self) -> PathBuf {
        self.data_dir.join("tesla_tweets_raw.csv")
    }

    /// Stage 2 output: cleaned text plus keyword features.
    pub fn cleaned_path(&self) -> PathBuf {
        self.data_dir.join("tesla_tweets_cleaned.csv")
    }

    /// Stage 3 output: sentiment scores and classifications.
    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join("tesla_sentiment_results.csv")
    }
}
