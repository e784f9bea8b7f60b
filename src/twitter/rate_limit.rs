// Bounded retry with exponential backoff for rate-limited API calls.
//
// The recent-search endpoint answers 429 when the request quota for the
// window is spent. Retries are bounded and the backoff is capped — a
// sustained limit surfaces the error instead of looping forever.

use std::time::Duration;

use anyhow::Result;
use tracing::warn;

/// Maximum number of retry attempts on rate-limit (429) errors.
const MAX_RETRIES: u32 = 5;

/// Base delay for exponential backoff (doubles each retry).
const BASE_BACKOFF: Duration = Duration::from_secs(2);

/// Maximum backoff delay to cap exponential growth.
const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Check whether an error is a rate-limit (HTTP 429) error.
///
/// reqwest wraps HTTP errors in its own types, so we check the error
/// chain's Debug representation for "429" or "rate limit".
fn is_rate_limit_error(err: &anyhow::Error) -> bool {
    let debug_str = format!("{:?}", err);
    debug_str.contains("429")
        || debug_str.to_lowercase().contains("rate limit")
        || debug_str.to_lowercase().contains("ratelimit")
}

/// Retry an async operation with exponential backoff on rate-limit errors.
///
/// Rate-limit failures are retried up to `MAX_RETRIES` times with doubling
/// delays (plus jitter to avoid hammering the window boundary). Any other
/// error is returned immediately.
pub async fn with_retry<F, Fut, T>(operation: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_rate_limit_error(&err) || attempt >= MAX_RETRIES {
                    return Err(err);
                }

                attempt += 1;

                // Exponential backoff: base * 2^attempt, capped at MAX_BACKOFF
                let backoff = BASE_BACKOFF
                    .saturating_mul(1u32 << attempt)
                    .min(MAX_BACKOFF);

                // +/- 25% jitter
                let jitter_factor = 0.75 + rand::random::<f64>() * 0.5;
                let jittered = Duration::from_secs_f64(backoff.as_secs_f64() * jitter_factor);

                warn!(
                    attempt = attempt,
                    max_retries = MAX_RETRIES,
                    backoff_secs = jittered.as_secs_f64(),
                    "Rate limited (429), retrying in {:.1}s (attempt {}/{})",
                    jittered.as_secs_f64(),
                    attempt,
                    MAX_RETRIES,
                );

                tokio::time::sleep(jittered).await;
            }
        }
    }
}
