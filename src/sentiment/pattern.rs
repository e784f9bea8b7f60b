// Pattern-lexicon scorer — the secondary opinion.
//
// A small evaluative lexicon where each entry carries a polarity in [-1, 1]
// and a subjectivity in [0, 1]. The text polarity is the clamped mean of
// matched-word polarities after intensifier and negation handling; the
// subjectivity is the mean over the same matches. Subjectivity is reporting
// only — it never feeds classification.

use std::collections::{HashMap, HashSet};

use super::traits::{ScoreBreakdown, SentimentScorer, SentimentScores};

/// How many tokens after a negation word still get their polarity flipped.
const NEGATION_WINDOW: usize = 3;

/// Flipping factor applied under negation — "not great" reads as mildly
/// negative, not as the mirror image of "great".
const NEGATION_FACTOR: f64 = -0.5;

/// (word, polarity, subjectivity) lexicon entries.
const LEXICON: &[(&str, f64, f64)] = &[
    // strong positive
    ("amazing", 0.8, 0.9),
    ("awesome", 0.8, 0.9),
    ("best", 0.9, 0.6),
    ("brilliant", 0.8, 0.9),
    ("excellent", 0.9, 0.8),
    ("fantastic", 0.8, 0.9),
    ("genius", 0.8, 0.8),
    ("incredible", 0.9, 0.9),
    ("love", 0.7, 0.7),
    ("loved", 0.7, 0.7),
    ("perfect", 0.9, 0.9),
    ("wonderful", 0.9, 0.9),
    ("inspiring", 0.7, 0.8),
    ("outstanding", 0.9, 0.9),
    ("impressive", 0.8, 0.8),
    ("mind-blowing", 0.9, 0.9),
    // moderate positive
    ("good", 0.6, 0.6),
    ("great", 0.7, 0.7),
    ("nice", 0.5, 0.8),
    ("happy", 0.6, 0.8),
    ("glad", 0.5, 0.8),
    ("cool", 0.4, 0.7),
    ("fast", 0.3, 0.4),
    ("strong", 0.4, 0.5),
    ("solid", 0.4, 0.5),
    ("reliable", 0.5, 0.5),
    ("smooth", 0.4, 0.5),
    ("improved", 0.4, 0.4),
    ("better", 0.5, 0.5),
    ("promising", 0.5, 0.7),
    ("safe", 0.4, 0.4),
    ("efficient", 0.5, 0.5),
    ("comfortable", 0.5, 0.6),
    ("worth", 0.3, 0.4),
    ("win", 0.5, 0.6),
    ("winning", 0.5, 0.6),
    // strong negative
    ("awful", -0.8, 0.9),
    ("terrible", -0.9, 0.9),
    ("horrible", -0.9, 0.9),
    ("worst", -0.9, 0.6),
    ("hate", -0.7, 0.8),
    ("hated", -0.7, 0.8),
    ("disaster", -0.8, 0.7),
    ("garbage", -0.8, 0.8),
    ("scam", -0.9, 0.7),
    ("fraud", -0.9, 0.7),
    ("dangerous", -0.6, 0.5),
    ("broken", -0.6, 0.4),
    ("useless", -0.7, 0.8),
    ("unacceptable", -0.7, 0.8),
    ("nightmare", -0.8, 0.8),
    // moderate negative
    ("bad", -0.6, 0.7),
    ("poor", -0.5, 0.6),
    ("ugly", -0.5, 0.8),
    ("slow", -0.3, 0.4),
    ("weak", -0.4, 0.5),
    ("cheap", -0.3, 0.5),
    ("overpriced", -0.5, 0.6),
    ("overvalued", -0.5, 0.6),
    ("expensive", -0.3, 0.4),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.6, 0.7),
    ("annoying", -0.5, 0.7),
    ("unreliable", -0.5, 0.5),
    ("unsafe", -0.5, 0.5),
    ("worried", -0.4, 0.7),
    ("problem", -0.3, 0.3),
    ("problems", -0.3, 0.3),
    ("issue", -0.3, 0.3),
    ("issues", -0.3, 0.3),
    ("crash", -0.6, 0.4),
    ("crashing", -0.6, 0.4),
    ("struggling", -0.4, 0.5),
    ("unprofessional", -0.5, 0.7),
    ("rattles", -0.3, 0.4),
    ("squeaks", -0.3, 0.4),
    ("degraded", -0.4, 0.4),
    ("bubble", -0.4, 0.5),
];

/// (word, multiplier) intensity modifiers applied to the next lexicon hit.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("super", 1.4),
    ("highly", 1.3),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("rather", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.6),
    ("barely", 0.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "dont", "don't", "doesnt", "doesn't",
    "didnt", "didn't", "cant", "can't", "couldnt", "couldn't", "wont", "won't", "wouldnt",
    "wouldn't", "shouldnt", "shouldn't", "isnt", "isn't", "arent", "aren't", "wasnt", "wasn't",
    "werent", "weren't",
];

/// Lexicon scorer in the style of pattern-based polarity analyzers.
pub struct PatternScorer {
    lexicon: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl PatternScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().map(|&(w, p, s)| (w, (p, s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }
}

impl Default for PatternScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for PatternScorer {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn score_text(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);

        let mut polarities: Vec<f64> = Vec::new();
        let mut subjectivities: Vec<f64> = Vec::new();
        let mut modifier = 1.0;
        let mut negated = false;
        let mut tokens_since_negation = 0;

        for token in &tokens {
            let token = token.as_str();

            if self.negations.contains(token) {
                negated = true;
                tokens_since_negation = 0;
                continue;
            }

            if let Some(&boost) = self.intensifiers.get(token) {
                modifier = boost;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = self.lexicon.get(token) {
                let mut polarity = polarity * modifier;
                if negated && tokens_since_negation < NEGATION_WINDOW {
                    polarity *= NEGATION_FACTOR;
                }
                polarities.push(polarity);
                subjectivities.push(subjectivity);
                modifier = 1.0;
            }

            if negated {
                tokens_since_negation += 1;
                if tokens_since_negation >= NEGATION_WINDOW {
                    negated = false;
                }
            }
        }

        if polarities.is_empty() {
            return SentimentScores {
                polarity: 0.0,
                breakdown: ScoreBreakdown {
                    subjectivity: Some(0.0),
                    ..Default::default()
                },
            };
        }

        let polarity =
            (polarities.iter().sum::<f64>() / polarities.len() as f64).clamp(-1.0, 1.0);
        let subjectivity =
            (subjectivities.iter().sum::<f64>() / subjectivities.len() as f64).clamp(0.0, 1.0);

        SentimentScores {
            polarity,
            breakdown: ScoreBreakdown {
                subjectivity: Some(subjectivity),
                ..Default::default()
            },
        }
    }
}

/// Lowercase alphabetic tokens, apostrophes kept so contractions like
/// "don't" survive as single tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphabetic() || c == '\'' || c == '-'))
        .map(|t| t.trim_matches(|c| c == '\'' || c == '-').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn praise_scores_positive() {
        let scorer = PatternScorer::new();
        let scores = scorer.score_text("The autopilot feature is incredible and I love it");
        assert!(scores.polarity > 0.1);
        assert!(scores.breakdown.subjectivity.unwrap() > 0.5);
    }

    #[test]
    fn complaint_scores_negative() {
        let scorer = PatternScorer::new();
        let scores = scorer.score_text("Terrible build quality, awful customer service");
        assert!(scores.polarity < -0.1);
    }

    #[test]
    fn negation_flips_polarity() {
        let scorer = PatternScorer::new();
        let plain = scorer.score_text("the car is good");
        let negated = scorer.score_text("the car is not good");
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
    }

    #[test]
    fn intensifier_raises_magnitude() {
        let scorer = PatternScorer::new();
        let plain = scorer.score_text("good");
        let boosted = scorer.score_text("very good");
        assert!(boosted.polarity > plain.polarity);
    }

    #[test]
    fn unscored_text_is_zero() {
        let scorer = PatternScorer::new();
        let scores = scorer.score_text("the quarterly delivery numbers are out");
        assert_eq!(scores.polarity, 0.0);
        assert_eq!(scores.breakdown.subjectivity, Some(0.0));
    }

    #[test]
    fn empty_text_is_zero() {
        let scorer = PatternScorer::new();
        assert_eq!(scorer.score_text("").polarity, 0.0);
    }
}
