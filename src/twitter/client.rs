// X API v2 client — bearer-authenticated recent search over HTTP.
//
// A thin reqwest wrapper with typed response structs. Only the
// recent-search endpoint is used; author handles come back in the same
// response via the author_id expansion, so no second lookup is needed.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

/// Default base URL for the X API.
pub const DEFAULT_API_URL: &str = "https://api.twitter.com";

/// Bearer-authenticated client for the v2 recent-search endpoint.
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
    bearer_token: String,
}

impl SearchClient {
    /// Create a new client pointing at the given base URL.
    ///
    /// Defaults to `https://api.twitter.com` — pass a different URL for
    /// testing against a local stub.
    pub fn new(base_url: &str, bearer_token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("moodring/0.1 (tesla-sentiment)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.to_string(),
        })
    }

    /// Fetch one page of recent search results (up to `max_results` tweets,
    /// API maximum 100). Pass the previous page's `next_token` to paginate.
    pub async fn search_recent(
        &self,
        query: &str,
        max_results: u32,
        next_token: Option<&str>,
    ) -> Result<SearchResponse> {
        let url = format!("{}/2/tweets/search/recent", self.base_url);
        let max_results = max_results.to_string();

        let mut params: Vec<(&str, &str)> = vec![
            ("query", query),
            ("tweet.fields", "created_at,public_metrics,author_id"),
            ("expansions", "author_id"),
            ("user.fields", "username"),
            ("max_results", &max_results),
        ];
        if let Some(token) = next_token {
            params.push(("next_token", token));
        }

        debug!(query = query, next_token = ?next_token, "Recent search request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.bearer_token)
            .query(&params)
            .send()
            .await
            .context("Search request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            match status.as_u16() {
                401 => anyhow::bail!(
                    "Authentication failed (401 Unauthorized).\n\
                     The bearer token is invalid, expired, or misconfigured. Check that:\n\
                     1. TWITTER_BEARER_TOKEN in .env contains a valid token\n\
                     2. The token has not expired (generate a new one if needed)\n\
                     3. There are no quotes or spaces around the token in .env"
                ),
                400 => anyhow::bail!("Invalid search request (400): {body}"),
                _ => anyhow::bail!("Search endpoint returned {status}: {body}"),
            }
        }

        response
            .json::<SearchResponse>()
            .await
            .context("Failed to deserialize search response")
    }

    /// Probe the API with a minimal query to verify the bearer token before
    /// starting a long collection run.
    pub async fn verify_credentials(&self) -> Result<()> {
        self.search_recent("Tesla -is:retweet lang:en", 10, None)
            .await
            .context("Connection test against the search API failed")?;
        Ok(())
    }
}

// -- Serde types for /2/tweets/search/recent --

/// One page of recent-search results.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<ApiTweet>,
    pub includes: Option<Includes>,
    pub meta: Option<SearchMeta>,
}

#[derive(Debug, Deserialize)]
pub struct ApiTweet {
    pub id: String,
    pub text: String,
    pub created_at: Option<DateTime<Utc>>,
    pub author_id: Option<String>,
    pub public_metrics: Option<PublicMetrics>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PublicMetrics {
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub quote_count: u64,
}

/// Expanded objects referenced by the page's tweets.
#[derive(Debug, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub users: Vec<ApiUser>,
}

#[derive(Debug, Deserialize)]
pub struct ApiUser {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchMeta {
    pub next_token: Option<String>,
}
