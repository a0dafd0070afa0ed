//! Severity assessment.
//!
//! Counts severity keyword phrases and picks a level by fixed priority:
//! any Critical hit wins, then High, then Medium, otherwise Low.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::count_present;
use crate::error::AppError;

/// Urgency level. Ordinal: Critical > High > Medium > Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Priority order, most urgent first
    pub const ALL: [Severity; 4] = [Severity::Critical, Severity::High, Severity::Medium, Severity::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Severity::Critical => &[
                "urgent",
                "emergency",
                "crisis",
                "critical",
                "immediate",
                "severe",
                "dangerous",
            ],
            Severity::High => &[
                "serious",
                "important",
                "significant",
                "major",
                "concerning",
                "worrying",
            ],
            Severity::Medium => &["moderate", "average", "standard", "typical", "normal"],
            Severity::Low => &["minor", "small", "slight", "minimal", "insignificant"],
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Severity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim())
            .ok_or_else(|| AppError::Validation(format!("unknown severity '{}'", s)))
    }
}

/// Result of severity assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityAssessment {
    pub assessed_severity: Severity,
    /// Presence count for every level
    pub scores: BTreeMap<Severity, usize>,
}

pub struct SeverityAssessor {
    table: Vec<(Severity, &'static [&'static str])>,
}

impl Default for SeverityAssessor {
    fn default() -> Self {
        Self::new()
    }
}

impl SeverityAssessor {
    pub fn new() -> Self {
        let table = Severity::ALL.iter().map(|s| (*s, s.keywords())).collect();
        Self { table }
    }

    /// Assesses already-normalized (lowercased) text.
    pub fn assess(&self, text: &str) -> SeverityAssessment {
        let scores: BTreeMap<Severity, usize> = self
            .table
            .iter()
            .map(|(severity, keywords)| (*severity, count_present(text, keywords)))
            .collect();

        // Low is the fallback whatever its own count is.
        let assessed_severity = [Severity::Critical, Severity::High, Severity::Medium]
            .into_iter()
            .find(|s| scores[s] > 0)
            .unwrap_or(Severity::Low);

        SeverityAssessment {
            assessed_severity,
            scores,
        }
    }
}
