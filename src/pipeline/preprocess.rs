// Preprocessing stage — normalize text, extract keyword features.
//
// Reads the raw CSV, enriches every row, drops rows whose cleaned text came
// out empty (link-only or emoji-only posts), and writes the cleaned CSV.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::store::{self, CleanPost};
use crate::text::{extract_features, Normalizer};

/// Outcome counts from a preprocessing run.
pub struct PreprocessSummary {
    pub kept: usize,
    pub removed_empty: usize,
}

/// Run the preprocessing stage. Fails fast when the raw CSV is missing.
pub fn run(input: &Path, output: &Path) -> Result<PreprocessSummary> {
    if !input.exists() {
        anyhow::bail!(
            "Input file not found: {}\n\
             Run `moodring collect` (or `moodring seed`) first.",
            input.display()
        );
    }

    let raw = store::load_raw(input)?;
    let total = raw.len();
    println!("Cleaning {total} posts...");

    let normalizer = Normalizer::default();

    let cleaned: Vec<CleanPost> = raw
        .into_iter()
        .map(|post| {
            let text_cleaned = normalizer.normalize(&post.text);
            // Features come from the original text — "model 3" would not
            // survive digit stripping.
            let features = extract_features(&post.text);
            CleanPost::enrich(post, text_cleaned, features)
        })
        .filter(|post| !post.text_cleaned.is_empty())
        .collect();

    let kept = cleaned.len();
    let removed_empty = total - kept;

    store::save_clean(output, &cleaned)?;

    info!(
        kept = kept,
        removed = removed_empty,
        path = %output.display(),
        "Preprocessing finished"
    );

    Ok(PreprocessSummary {
        kept,
        removed_empty,
    })
}
