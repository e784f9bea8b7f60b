// Text normalization — the fixed cleaning pipeline applied before scoring.
//
// The substitution order matters: links and mentions are stripped before the
// punctuation pass would otherwise dismember them, and hashtag words survive
// with the '#' removed. The output contains only lowercase alphabetic tokens
// longer than two characters, with stopwords filtered out.

use std::collections::HashSet;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// Text normalizer with precompiled patterns and the English stopword list.
pub struct Normalizer {
    re_links: Regex,
    re_mentions: Regex,
    re_hashtags: Regex,
    re_non_alpha: Regex,
    re_digits: Regex,
    re_spaces: Regex,
    stopwords: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        // The patterns are static; a failure here is a programming error.
        Self {
            re_links: Regex::new(r"http\S+|www\.\S+|https\S+").unwrap(),
            re_mentions: Regex::new(r"@\w+").unwrap(),
            re_hashtags: Regex::new(r"#(\w+)").unwrap(),
            re_non_alpha: Regex::new(r"[^a-zA-Z\s]").unwrap(),
            re_digits: Regex::new(r"\d+").unwrap(),
            re_spaces: Regex::new(r"\s+").unwrap(),
            stopwords: get(LANGUAGE::English).into_iter().collect(),
        }
    }
}

impl Normalizer {
    /// Normalize a post's text. Empty input yields empty output;
    /// this never fails.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text = self.re_links.replace_all(text, "");
        let text = self.re_mentions.replace_all(&text, "");
        let text = self.re_hashtags.replace_all(&text, "$1");
        let text = self.re_non_alpha.replace_all(&text, "");
        let text = self.re_digits.replace_all(&text, "");
        let text = text.to_lowercase();
        let text = self.re_spaces.replace_all(&text, " ");

        text.split_whitespace()
            .filter(|token| !self.stopwords.contains(*token))
            .filter(|token| token.len() > 2)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_links_mentions_and_punctuation() {
        let normalizer = Normalizer::default();
        let cleaned = normalizer.normalize("I LOVE my Tesla!!! https://t.co/x @Tesla #amazing");
        assert_eq!(cleaned, "love tesla amazing");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn idempotent_on_normalized_text() {
        let normalizer = Normalizer::default();
        let once = normalizer.normalize("Battery range dropped 20% after the v11.4.2 update :(");
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice);
    }
}
