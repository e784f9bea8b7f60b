// Collection — paginated recent search with dedup and periodic flush.
//
// Resumes from whatever the raw CSV already holds: existing ids are never
// re-added, and the merged dataset is flushed to disk every few new records
// so a crash loses at most one flush interval of posts.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::store::{self, RawPost};

use super::client::SearchClient;
use super::rate_limit::with_retry;

/// Flush the dataset to disk after this many new records.
const FLUSH_EVERY: usize = 10;

/// Results requested per page (API maximum).
const PAGE_SIZE: u32 = 100;

/// Collect posts matching `query` until `max_posts` records are on disk.
///
/// Returns the total number of records in the dataset after the run.
pub async fn collect_posts(
    client: &SearchClient,
    query: &str,
    max_posts: usize,
    output: &Path,
) -> Result<usize> {
    // Resume from the existing file. merge_posts also dedups rows left
    // behind by an interrupted earlier run.
    let mut dataset = if output.exists() {
        let existing = store::merge_posts(store::load_raw(output)?, Vec::new());
        println!(
            "  {} posts already collected, resuming...",
            existing.len()
        );
        existing
    } else {
        Vec::new()
    };

    let mut seen: HashSet<String> = dataset.iter().map(|p| p.id.clone()).collect();
    let mut count = dataset.len();

    if count >= max_posts {
        println!("  Dataset already holds {count} posts (cap {max_posts}), nothing to collect.");
        return Ok(count);
    }

    let pb = ProgressBar::new(max_posts as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Collecting [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );
    pb.set_position(count as u64);

    let mut next_token: Option<String> = None;
    let mut pending = 0usize;

    'pages: loop {
        let token = next_token.clone();
        let page = with_retry(|| client.search_recent(query, PAGE_SIZE, token.as_deref())).await?;

        let usernames: std::collections::HashMap<String, String> = page
            .includes
            .iter()
            .flat_map(|inc| inc.users.iter())
            .map(|u| (u.id.clone(), u.username.clone()))
            .collect();

        let page_len = page.data.len();

        for tweet in page.data {
            if !seen.insert(tweet.id.clone()) {
                continue;
            }

            let metrics = tweet.public_metrics.unwrap_or_default();
            let user = tweet
                .author_id
                .as_ref()
                .and_then(|id| usernames.get(id).cloned())
                .unwrap_or_else(|| "unknown".to_string());

            dataset.push(RawPost {
                id: tweet.id,
                date: tweet.created_at.unwrap_or_else(chrono::Utc::now),
                text: tweet.text,
                user,
                likes: metrics.like_count,
                retweets: metrics.retweet_count,
                replies: metrics.reply_count,
                quotes: metrics.quote_count,
            });

            count += 1;
            pending += 1;
            pb.set_position(count as u64);

            // Partial flush — bounds data loss on a crash, nothing more.
            if pending >= FLUSH_EVERY {
                store::save_raw(output, &dataset)?;
                pending = 0;
            }

            if count >= max_posts {
                break 'pages;
            }
        }

        debug!(
            page_posts = page_len,
            total_collected = count,
            "Fetched search page"
        );

        next_token = page.meta.and_then(|m| m.next_token);
        if next_token.is_none() || page_len == 0 {
            break;
        }
    }

    if pending > 0 || !output.exists() {
        store::save_raw(output, &dataset)?;
    }

    pb.finish_and_clear();

    info!(
        count = count,
        path = %output.display(),
        "Collection finished"
    );

    Ok(count)
}
