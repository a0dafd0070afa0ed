//! Analysis Result - Output structure of the text analyzer.
//!
//! Created once per submission, never mutated, stored by the caller as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::CategoryConfidence;
use super::keywords::KeyIssues;
use super::recommendations::Recommendations;
use super::sentiment::Sentiment;
use super::severity::{Severity, SeverityAssessment};
use super::stakeholders::StakeholderSummary;
use crate::error::Result;

/// Complete analysis of one submitted problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sentiment label with polarity and subjectivity
    pub sentiment: Sentiment,

    /// Category scores and how well the provided category fits
    pub category_confidence: CategoryConfidence,

    /// Ordinal severity with per-level keyword counts
    pub severity_assessment: SeverityAssessment,

    /// Most frequent non-trivial words
    pub key_issues: KeyIssues,

    /// Stakeholder types mentioned in the text
    pub stakeholders: StakeholderSummary,

    /// Template recommendations and priority
    pub recommendations: Recommendations,

    /// When the analysis was produced
    pub analysis_timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn severity(&self) -> Severity {
        self.severity_assessment.assessed_severity
    }

    /// Equality on everything except `analysis_timestamp`.
    pub fn same_analysis(&self, other: &AnalysisResult) -> bool {
        self.sentiment == other.sentiment
            && self.category_confidence == other.category_confidence
            && self.severity_assessment == other.severity_assessment
            && self.key_issues == other.key_issues
            && self.stakeholders == other.stakeholders
            && self.recommendations == other.recommendations
    }

    /// Stable storage encoding (pretty JSON).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
