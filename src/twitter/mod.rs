// X (Twitter) API v2 — search client, pagination, rate-limit handling.

pub mod client;
pub mod rate_limit;
pub mod search;

/// The fixed search query: company names, cashtag, handle, and the CEO,
/// English only, retweets excluded.
pub const SEARCH_QUERY: &str = r#"(Tesla OR TSLA OR @Tesla OR "Elon Musk") -is:retweet lang:en"#;
