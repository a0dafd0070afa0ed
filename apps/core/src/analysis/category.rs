//! Category classification.
//!
//! Scores the normalized text against the eight fixed problem categories and
//! reports how well the caller-provided category matches.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{count_present, round3};
use crate::error::AppError;

/// Problem-domain category. Declaration order is the canonical order used for
/// tie-breaking and for the key order of serialized score maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Social Division")]
    SocialDivision,
    Disinformation,
    #[serde(rename = "Community Safety")]
    CommunitySafety,
    Infrastructure,
    Environment,
    Education,
    Healthcare,
    Economic,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::SocialDivision,
        Category::Disinformation,
        Category::CommunitySafety,
        Category::Infrastructure,
        Category::Environment,
        Category::Education,
        Category::Healthcare,
        Category::Economic,
    ];

    /// Returns the human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::SocialDivision => "Social Division",
            Category::Disinformation => "Disinformation",
            Category::CommunitySafety => "Community Safety",
            Category::Infrastructure => "Infrastructure",
            Category::Environment => "Environment",
            Category::Education => "Education",
            Category::Healthcare => "Healthcare",
            Category::Economic => "Economic",
        }
    }

    /// Exact label lookup. Unknown labels are not an error for the analyzer.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Keyword phrases associated with this category
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::SocialDivision => &[
                "division",
                "conflict",
                "tension",
                "disagreement",
                "polarization",
                "us vs them",
                "exclusion",
            ],
            Category::Disinformation => &[
                "fake news",
                "misinformation",
                "false information",
                "rumor",
                "conspiracy",
                "propaganda",
            ],
            Category::CommunitySafety => &[
                "safety",
                "crime",
                "security",
                "violence",
                "threat",
                "danger",
                "protection",
            ],
            Category::Infrastructure => &[
                "infrastructure",
                "roads",
                "utilities",
                "transportation",
                "facilities",
                "maintenance",
            ],
            Category::Environment => &[
                "environment",
                "pollution",
                "climate",
                "sustainability",
                "green",
                "waste",
                "conservation",
            ],
            Category::Education => &[
                "education",
                "school",
                "learning",
                "academic",
                "student",
                "teacher",
                "curriculum",
            ],
            Category::Healthcare => &[
                "health",
                "medical",
                "healthcare",
                "hospital",
                "doctor",
                "treatment",
                "wellness",
            ],
            Category::Economic => &[
                "economic",
                "employment",
                "business",
                "economy",
                "financial",
                "jobs",
                "income",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim())
            .ok_or_else(|| AppError::Validation(format!("unknown category '{}'", s)))
    }
}

/// How well the text matches the caller-provided category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfidence {
    /// Category as given by the caller, verbatim
    pub provided_category: String,
    /// Highest scoring category (first in canonical order on ties)
    pub best_match: Category,
    /// Provided category score relative to the best score (0.0 - 1.0)
    pub confidence: f64,
    /// Presence count for every category
    pub all_scores: BTreeMap<Category, usize>,
}

/// Category scorer over the fixed keyword tables
pub struct CategoryScorer {
    table: Vec<(Category, &'static [&'static str])>,
}

impl Default for CategoryScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryScorer {
    pub fn new() -> Self {
        let table = Category::ALL.iter().map(|c| (*c, c.keywords())).collect();
        Self { table }
    }

    /// Scores already-normalized (lowercased) text.
    pub fn score(&self, text: &str, provided_category: &str) -> CategoryConfidence {
        let all_scores: BTreeMap<Category, usize> = self
            .table
            .iter()
            .map(|(category, keywords)| (*category, count_present(text, keywords)))
            .collect();

        // Explicit first-max scan: a later category only wins on a strictly higher score.
        let mut best_match = Category::ALL[0];
        let mut max_score = 0;
        for (category, _) in &self.table {
            let score = all_scores[category];
            if score > max_score {
                best_match = *category;
                max_score = score;
            }
        }

        let provided_score = Category::from_label(provided_category)
            .map(|c| all_scores[&c])
            .unwrap_or(0);

        let confidence = if max_score > 0 {
            round3(provided_score as f64 / max_score as f64)
        } else {
            0.0
        };

        CategoryConfidence {
            provided_category: provided_category.to_string(),
            best_match,
            confidence,
            all_scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_scores_has_every_category() {
        let scorer = CategoryScorer::new();
        let result = scorer.score("", "Education");
        assert_eq!(result.all_scores.len(), 8);
        assert!(result.all_scores.values().all(|&s| s == 0));
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.best_match, Category::SocialDivision);
    }

    #[test]
    fn test_tie_goes_to_first_category() {
        let scorer = CategoryScorer::new();
        // one Healthcare hit, one Education hit: Education comes first
        let result = scorer.score("the hospital next to the school", "Healthcare");
        assert_eq!(result.all_scores[&Category::Education], 1);
        assert_eq!(result.all_scores[&Category::Healthcare], 1);
        assert_eq!(result.best_match, Category::Education);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_confidence_is_relative_to_best() {
        let scorer = CategoryScorer::new();
        let text = "fake news and misinformation spread a rumor about crime";
        let result = scorer.score(text, "Community Safety");
        assert_eq!(result.all_scores[&Category::Disinformation], 3);
        assert_eq!(result.all_scores[&Category::CommunitySafety], 1);
        assert_eq!(result.best_match, Category::Disinformation);
        assert_eq!(result.confidence, 0.333);
    }

    #[test]
    fn test_unknown_provided_category_scores_zero() {
        let scorer = CategoryScorer::new();
        let result = scorer.score("pollution and waste everywhere", "Potholes");
        assert_eq!(result.provided_category, "Potholes");
        assert_eq!(result.best_match, Category::Environment);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        assert!("social division".parse::<Category>().is_err());
    }

    #[test]
    fn test_scores_serialize_with_labels_in_order() {
        let scorer = CategoryScorer::new();
        let json = serde_json::to_string(&scorer.score("", "Economic").all_scores).unwrap();
        assert!(json.starts_with("{\"Social Division\":0,\"Disinformation\":0,\"Community Safety\":0"));
        assert!(json.ends_with("\"Economic\":0}"));
    }
}
