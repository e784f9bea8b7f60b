// Pipeline status — which stage CSVs exist and what they hold.

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::config::Config;
use crate::store;

/// Print per-stage file presence, record counts, and date ranges.
pub fn show(config: &Config) -> Result<()> {
    println!("{}", "=== Moodring Status ===".bold());
    println!("  Data directory: {}", config.data_dir.display());
    println!();

    let raw = config.raw_path();
    if raw.exists() {
        let posts = store::load_raw(&raw)?;
        let dates: Vec<DateTime<Utc>> = posts.iter().map(|p| p.date).collect();
        print_stage("collect", posts.len(), &dates);
    } else {
        print_missing("collect", "moodring collect");
    }

    let cleaned = config.cleaned_path();
    if cleaned.exists() {
        let posts = store::load_clean(&cleaned)?;
        let dates: Vec<DateTime<Utc>> = posts.iter().map(|p| p.date).collect();
        print_stage("preprocess", posts.len(), &dates);
    } else {
        print_missing("preprocess", "moodring preprocess");
    }

    let results = config.results_path();
    if results.exists() {
        let posts = store::load_results(&results)?;
        let dates: Vec<DateTime<Utc>> = posts.iter().map(|p| p.date).collect();
        print_stage("analyze", posts.len(), &dates);
    } else {
        print_missing("analyze", "moodring analyze");
    }

    Ok(())
}

fn print_stage(stage: &str, count: usize, dates: &[DateTime<Utc>]) {
    let range = match (dates.iter().min(), dates.iter().max()) {
        (Some(min), Some(max)) => format!(
            "{} to {}",
            min.format("%Y-%m-%d %H:%M"),
            max.format("%Y-%m-%d %H:%M")
        ),
        _ => "empty".to_string(),
    };
    println!(
        "  {} {:<12} {:>6} records  ({})",
        "✓".green(),
        stage,
        count,
        range.dimmed()
    );
}

fn print_missing(stage: &str, command: &str) {
    println!(
        "  {} {:<12} not run yet — {}",
        "-".dimmed(),
        stage,
        format!("run `{command}`").dimmed()
    );
}
