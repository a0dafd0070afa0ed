//! Text Analyzer - Main orchestrator for the analysis module.
//!
//! Normalizes the submission text once, then runs sentiment, category,
//! severity, key-issue, stakeholder and recommendation steps over it.

use chrono::Utc;
use std::sync::OnceLock;
use tracing::{debug, warn};

use super::category::{Category, CategoryScorer};
use super::keywords::IssueExtractor;
use super::recommendations::RecommendationEngine;
use super::result::AnalysisResult;
use super::sentiment::SentimentScorer;
use super::severity::SeverityAssessor;
use super::stakeholders::StakeholderIdentifier;

/// Process-wide analyzer; tables are immutable so one instance serves every caller.
static SHARED_ANALYZER: OnceLock<TextAnalyzer> = OnceLock::new();

/// Keyword-based analyzer for submitted problems
pub struct TextAnalyzer {
    sentiment_scorer: SentimentScorer,
    category_scorer: CategoryScorer,
    severity_assessor: SeverityAssessor,
    issue_extractor: IssueExtractor,
    stakeholder_identifier: StakeholderIdentifier,
    recommendation_engine: RecommendationEngine,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    /// Create a new analyzer with the built-in keyword tables
    pub fn new() -> Self {
        Self {
            sentiment_scorer: SentimentScorer::new(),
            category_scorer: CategoryScorer::new(),
            severity_assessor: SeverityAssessor::new(),
            issue_extractor: IssueExtractor::new(),
            stakeholder_identifier: StakeholderIdentifier::new(),
            recommendation_engine: RecommendationEngine::new(),
        }
    }

    /// Shared instance, built on first use
    pub fn shared() -> &'static TextAnalyzer {
        SHARED_ANALYZER.get_or_init(TextAnalyzer::new)
    }

    /// Title and description joined by a single space, lowercased
    pub fn normalize(title: &str, description: &str) -> String {
        format!("{} {}", title, description).to_lowercase()
    }

    /// Analyze a submission. Never fails: empty strings yield zero scores and Low severity.
    pub fn analyze(&self, title: &str, description: &str, provided_category: &str) -> AnalysisResult {
        let text = Self::normalize(title, description);

        if Category::from_label(provided_category).is_none() {
            warn!(category = provided_category, "Unrecognized category, confidence will be 0");
        }

        // 1. Sentiment
        let sentiment = self.sentiment_scorer.score(&text);

        // 2. Category fit
        let category_confidence = self.category_scorer.score(&text, provided_category);

        // 3. Severity
        let severity_assessment = self.severity_assessor.assess(&text);

        // 4. Key issues
        let key_issues = self.issue_extractor.extract(&text);

        // 5. Stakeholders
        let stakeholders = self.stakeholder_identifier.identify(&text);

        // 6. Recommendations (needs severity first)
        let recommendations = self
            .recommendation_engine
            .generate(provided_category, severity_assessment.assessed_severity);

        debug!(
            category = provided_category,
            best_match = %category_confidence.best_match,
            severity = %severity_assessment.assessed_severity,
            sentiment = ?sentiment.label,
            stakeholder_types = stakeholders.total_types,
            "Problem analyzed"
        );

        AnalysisResult {
            sentiment,
            category_confidence,
            severity_assessment,
            key_issues,
            stakeholders,
            recommendations,
            analysis_timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Severity, StakeholderType};

    #[test]
    fn test_normalize() {
        assert_eq!(TextAnalyzer::normalize("Broken LIGHTS", "On Main St"), "broken lights on main st");
        assert_eq!(TextAnalyzer::normalize("", ""), " ");
    }

    #[test]
    fn test_phrase_can_span_title_and_description() {
        let result = TextAnalyzer::new().analyze("Fake", "news everywhere", "Disinformation");
        assert_eq!(result.category_confidence.all_scores[&Category::Disinformation], 1);
        assert_eq!(result.severity(), Severity::Low);
    }

    #[test]
    fn test_shared_instance_is_reused() {
        let a = TextAnalyzer::shared() as *const TextAnalyzer;
        let b = TextAnalyzer::shared() as *const TextAnalyzer;
        assert_eq!(a, b);
    }

    #[test]
    fn test_basic_analysis() {
        let analyzer = TextAnalyzer::new();
        let result = analyzer.analyze(
            "Polluted river",
            "Factory waste and pollution near the school worry local residents",
            "Environment",
        );
        assert_eq!(result.category_confidence.best_match, Category::Environment);
        assert_eq!(result.category_confidence.confidence, 1.0);
        assert!(result.stakeholders.contains(StakeholderType::Education));
        assert!(result.stakeholders.contains(StakeholderType::CommunityGroups));
        assert!(result.recommendations.recommendations.is_empty());
    }
}
