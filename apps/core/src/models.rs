use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status of a freshly submitted problem
pub const DEFAULT_PROBLEM_STATUS: &str = "Open";
/// Status of a freshly proposed solution
pub const DEFAULT_SOLUTION_STATUS: &str = "Proposed";

/// A problem as submitted by a citizen, before analysis.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct ProblemSubmission {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    /// One of the category labels; unknown labels are stored as given.
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    /// Severity declared by the submitter (the analysis makes its own assessment).
    #[validate(length(min = 1, max = 50))]
    pub severity: String,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    #[validate(length(min = 1, max = 100))]
    pub submitted_by: String,
}

/// A stored community problem.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Problem {
    /// The unique identifier for the problem (UUID).
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub severity: String,
    pub location: String,
    pub submitted_by: String,
    pub submitted_at: DateTime<Utc>,
    pub status: String,
    /// Serialized `AnalysisResult`, stored verbatim.
    pub analysis: String,
    #[serde(default)]
    pub stakeholder_count: u32,
    #[serde(default)]
    pub solution_count: u32,
}

/// A solution proposed for a problem.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct SolutionProposal {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub proposed_by: String,
}

/// A stored solution.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Solution {
    pub id: String,
    /// The problem this solution belongs to.
    pub problem_id: String,
    pub title: String,
    pub description: String,
    pub proposed_by: String,
    pub proposed_at: DateTime<Utc>,
    pub votes: u32,
    pub status: String,
}

/// Someone joining the platform as a stakeholder.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct StakeholderRegistration {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(max = 120))]
    pub email: String,
    /// Stakeholder type label (e.g. "Government", "NGOs").
    #[validate(length(min = 1, max = 100))]
    pub role: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
}

/// A registered stakeholder.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Stakeholder {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub organization: Option<String>,
    pub interests: Option<String>,
    pub joined_at: DateTime<Utc>,
}
