//! Stakeholder type inference.
//!
//! A type is identified when ANY of its keywords occurs in the text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Constituency label, also used as the role of registered stakeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StakeholderType {
    Government,
    #[serde(rename = "Community Groups")]
    CommunityGroups,
    Business,
    Education,
    Healthcare,
    Media,
    #[serde(rename = "NGOs")]
    Ngos,
}

impl StakeholderType {
    pub const ALL: [StakeholderType; 7] = [
        StakeholderType::Government,
        StakeholderType::CommunityGroups,
        StakeholderType::Business,
        StakeholderType::Education,
        StakeholderType::Healthcare,
        StakeholderType::Media,
        StakeholderType::Ngos,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StakeholderType::Government => "Government",
            StakeholderType::CommunityGroups => "Community Groups",
            StakeholderType::Business => "Business",
            StakeholderType::Education => "Education",
            StakeholderType::Healthcare => "Healthcare",
            StakeholderType::Media => "Media",
            StakeholderType::Ngos => "NGOs",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            StakeholderType::Government => &[
                "government",
                "city",
                "municipal",
                "mayor",
                "council",
                "official",
                "policy",
            ],
            StakeholderType::CommunityGroups => {
                &["community", "neighborhood", "residents", "citizens", "local"]
            }
            StakeholderType::Business => &[
                "business",
                "company",
                "corporate",
                "industry",
                "commerce",
                "economic",
            ],
            StakeholderType::Education => &[
                "school",
                "university",
                "college",
                "education",
                "student",
                "teacher",
            ],
            StakeholderType::Healthcare => {
                &["hospital", "clinic", "health", "medical", "doctor", "nurse"]
            }
            StakeholderType::Media => &["media", "news", "journalist", "press", "communication"],
            StakeholderType::Ngos => &["nonprofit", "organization", "charity", "foundation", "ngo"],
        }
    }
}

impl fmt::Display for StakeholderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StakeholderType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim())
            .ok_or_else(|| AppError::Validation(format!("unknown stakeholder role '{}'", s)))
    }
}

/// Result of stakeholder identification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderSummary {
    /// Matching types in fixed order, no duplicates
    pub identified_stakeholder_types: Vec<StakeholderType>,
    pub total_types: usize,
}

impl StakeholderSummary {
    pub fn contains(&self, kind: StakeholderType) -> bool {
        self.identified_stakeholder_types.contains(&kind)
    }
}

pub struct StakeholderIdentifier {
    table: Vec<(StakeholderType, &'static [&'static str])>,
}

impl Default for StakeholderIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl StakeholderIdentifier {
    pub fn new() -> Self {
        let table = StakeholderType::ALL.iter().map(|t| (*t, t.keywords())).collect();
        Self { table }
    }

    /// Identifies stakeholder types in already-normalized (lowercased) text.
    pub fn identify(&self, text: &str) -> StakeholderSummary {
        let identified: Vec<StakeholderType> = self
            .table
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .map(|(kind, _)| *kind)
            .collect();

        StakeholderSummary {
            total_types: identified.len(),
            identified_stakeholder_types: identified,
        }
    }
}
