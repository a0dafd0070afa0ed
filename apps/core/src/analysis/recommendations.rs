//! Template recommendations.
//!
//! Category templates come first, then one severity-triggered message.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::severity::Severity;

const MAX_RECOMMENDATIONS: usize = 5;

/// Recommendations attached to an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub recommendations: Vec<String>,
    /// Mirrors the assessed severity
    pub priority_level: Severity,
}

#[derive(Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Only three categories carry templates.
    pub fn category_templates(category: Category) -> &'static [&'static str] {
        match category {
            Category::SocialDivision => &[
                "Organize community dialogue sessions to address underlying tensions",
                "Implement diversity and inclusion training programs",
                "Create platforms for cross-community collaboration",
            ],
            Category::Disinformation => &[
                "Develop fact-checking and media literacy programs",
                "Create trusted information channels for the community",
                "Establish partnerships with local media for accurate reporting",
            ],
            Category::CommunitySafety => &[
                "Increase community policing and neighborhood watch programs",
                "Improve lighting and infrastructure in high-risk areas",
                "Develop youth engagement programs to prevent crime",
            ],
            _ => &[],
        }
    }

    pub fn severity_message(severity: Severity) -> Option<&'static str> {
        match severity {
            Severity::Critical => {
                Some("Immediate action required - consider emergency response protocols")
            }
            Severity::High => {
                Some("Prioritize this issue in community planning and resource allocation")
            }
            Severity::Medium | Severity::Low => None,
        }
    }

    /// `provided_category` is the caller's label; unknown labels get no templates.
    pub fn generate(&self, provided_category: &str, severity: Severity) -> Recommendations {
        let templates = Category::from_label(provided_category)
            .map(Self::category_templates)
            .unwrap_or_default();

        let recommendations = templates
            .iter()
            .copied()
            .chain(Self::severity_message(severity))
            .take(MAX_RECOMMENDATIONS)
            .map(str::to_string)
            .collect();

        Recommendations {
            recommendations,
            priority_level: severity,
        }
    }
}
