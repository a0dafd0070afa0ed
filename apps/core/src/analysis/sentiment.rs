//! Lexicon-based sentiment scoring.
//!
//! Polarity is the mean signed weight of matched lexicon words, subjectivity
//! the mean subjectivity weight. Negators flip and dampen the next match,
//! intensifiers amplify it.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use super::round3;

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("nice", 0.6, 1.0),
    ("helpful", 0.5, 0.6),
    ("positive", 0.23, 0.55),
    ("safe", 0.5, 0.5),
    ("clean", 0.37, 0.69),
    ("better", 0.5, 0.5),
    ("best", 1.0, 0.3),
    ("improved", 0.4, 0.5),
    ("successful", 0.75, 0.95),
    ("beautiful", 0.85, 1.0),
    ("grateful", 0.6, 0.8),
    ("hopeful", 0.45, 0.7),
    ("peaceful", 0.5, 0.6),
    ("fair", 0.7, 0.9),
    ("strong", 0.43, 0.73),
    ("healthy", 0.5, 0.5),
    ("united", 0.3, 0.4),
    // Negative
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("afraid", -0.6, 0.9),
    ("scared", -0.5, 0.8),
    ("dangerous", -0.6, 0.9),
    ("unsafe", -0.5, 0.5),
    ("dirty", -0.6, 0.8),
    ("broken", -0.4, 0.4),
    ("fake", -0.5, 1.0),
    ("false", -0.4, 0.6),
    ("violent", -0.8, 0.8),
    ("hostile", -0.6, 0.7),
    ("unfair", -0.5, 0.9),
    ("toxic", -0.6, 0.7),
    ("neglected", -0.4, 0.5),
    ("frustrating", -0.4, 0.7),
    ("painful", -0.7, 0.9),
    ("hard", -0.29, 0.54),
    ("difficult", -0.5, 1.0),
    ("serious", -0.33, 0.67),
    ("severe", -0.5, 0.8),
    ("critical", -0.2, 0.6),
];

const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "hardly", "without"];

/// (word, multiplier)
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("highly", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("quite", 1.1),
];

/// How many tokens a negator or intensifier stays armed for
const MODIFIER_REACH: usize = 3;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w']+").expect("Invalid regex: sentiment word pattern"));

/// Sentiment label derived from polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.1 {
            SentimentLabel::Positive
        } else if polarity < -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Result of sentiment scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// -1.0 (negative) to 1.0 (positive), 3 decimals
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective), 3 decimals
    pub subjectivity: f64,
}

pub struct SentimentScorer {
    lexicon: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().map(|(w, p, s)| (*w, (*p, *s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn is_negator(word: &str) -> bool {
        NEGATORS.contains(&word) || word.ends_with("n't")
    }

    /// Scores already-normalized (lowercased) text.
    pub fn score(&self, text: &str) -> Sentiment {
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();

        let mut negated = false;
        let mut intensity = 1.0;
        let mut reach = 0;

        for word in WORD_PATTERN.find_iter(text).map(|m| m.as_str()) {
            if Self::is_negator(word) {
                negated = true;
                reach = MODIFIER_REACH;
                continue;
            }
            if let Some(multiplier) = self.intensifiers.get(word) {
                intensity *= multiplier;
                reach = MODIFIER_REACH;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = self.lexicon.get(word) {
                let mut p = polarity * intensity;
                if negated {
                    p *= -0.5;
                }
                polarities.push(p.clamp(-1.0, 1.0));
                subjectivities.push((subjectivity * intensity).clamp(0.0, 1.0));
                negated = false;
                intensity = 1.0;
                reach = 0;
                continue;
            }

            if reach > 0 {
                reach -= 1;
                if reach == 0 {
                    negated = false;
                    intensity = 1.0;
                }
            }
        }

        let polarity = round3(mean(&polarities));
        let subjectivity = round3(mean(&subjectivities));

        Sentiment {
            label: SentimentLabel::from_polarity(polarity),
            polarity,
            subjectivity,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
