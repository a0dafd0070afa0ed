//! # Analysis Module
//!
//! Deterministic, keyword-based analysis of submitted community problems.
//! Runs once per submission; the caller stores the serialized result verbatim.
//!
//! ## Components
//! - `sentiment`: lexicon-based polarity / subjectivity scoring
//! - `category`: category keyword table and confidence scoring
//! - `severity`: severity keyword table and ordinal assessment
//! - `keywords`: key-issue extraction (frequent non-trivial words)
//! - `stakeholders`: stakeholder type inference
//! - `recommendations`: template recommendations per category and severity
//! - `result`: output record
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod category;
pub mod keywords;
pub mod recommendations;
pub mod result;
pub mod sentiment;
pub mod severity;
pub mod stakeholders;

pub use analyzer::TextAnalyzer;
pub use category::{Category, CategoryConfidence, CategoryScorer};
pub use keywords::{IssueExtractor, KeyIssues, TopIssues};
pub use recommendations::{RecommendationEngine, Recommendations};
pub use result::AnalysisResult;
pub use sentiment::{Sentiment, SentimentLabel, SentimentScorer};
pub use severity::{Severity, SeverityAssessment, SeverityAssessor};
pub use stakeholders::{StakeholderIdentifier, StakeholderSummary, StakeholderType};

/// Number of keyword phrases present in `text` (presence, not frequency).
pub(crate) fn count_present(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

/// Rounds to three decimal places.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_present_ignores_repeats() {
        let text = "crime crime crime and more violence";
        assert_eq!(count_present(text, &["crime", "violence", "threat"]), 2);
    }

    #[test]
    fn test_count_present_matches_substrings() {
        // "green" inside "greenery", multi-word phrases included
        assert_eq!(count_present("the greenery and fake news", &["green", "fake news"]), 2);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.66666), 0.667);
        assert_eq!(round3(-0.12345), -0.123);
        assert_eq!(round3(0.0), 0.0);
    }
}
