// Colored terminal output for sentiment summaries and rankings.
//
// This module handles all terminal-specific formatting: colors, tables,
// per-post previews. The main.rs display calls delegate here.

use colored::Colorize;

use crate::output::truncate_chars;
use crate::sentiment::SentimentStats;
use crate::store::models::ScoredPost;

/// Display the aggregate sentiment summary.
pub fn display_stats(stats: &SentimentStats) {
    println!("\n{}", "=== Sentiment Summary ===".bold());
    println!("  Total posts: {}", stats.total);
    println!(
        "  Positive: {:>5} ({})",
        stats.positive_count,
        format!("{:.1}%", stats.positive_percent).green()
    );
    println!(
        "  Negative: {:>5} ({})",
        stats.negative_count,
        format!("{:.1}%", stats.negative_percent).red()
    );
    println!(
        "  Neutral:  {:>5} ({})",
        stats.neutral_count,
        format!("{:.1}%", stats.neutral_percent).dimmed()
    );
    println!(
        "  Mean polarity: {:.3} (std {:.3})",
        stats.mean_polarity, stats.std_polarity
    );
    println!("  Mean subjectivity: {:.3}", stats.mean_subjectivity);
}

/// Display the most negative posts, most negative first.
pub fn display_top_negative(posts: &[ScoredPost]) {
    if posts.is_empty() {
        println!("\nNo negative posts found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} Negative Posts ===", posts.len()).bold()
    );

    for (i, post) in posts.iter().enumerate() {
        let preview = truncate_chars(&post.text, 120);
        println!(
            "\n  {:>2}. {} @{} ({} likes, {} reposts)",
            i + 1,
            format!("[{:+.3}]", post.polarity).red(),
            post.user,
            post.likes,
            post.retweets,
        );
        println!("      {}", preview.dimmed());
    }
    println!();
}
