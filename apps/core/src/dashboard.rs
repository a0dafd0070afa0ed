//! Dashboard aggregation.
//!
//! Plain count series over stored records; turning them into charts is left
//! to whoever renders the dashboard.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analysis::Severity;
use crate::models::{Problem, Solution, Stakeholder};

/// One bar / slice / point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub problems: usize,
    pub solutions: usize,
    pub stakeholders: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub totals: Totals,
    /// Order of first appearance
    pub by_category: Vec<CountEntry>,
    /// Critical, High, Medium, Low; levels with no problems are omitted
    pub by_severity: Vec<CountEntry>,
    /// `YYYY-MM`, ascending
    pub timeline: Vec<CountEntry>,
    /// Solutions proposed per problem category, order of first appearance
    pub solutions_by_category: Vec<CountEntry>,
    /// Order of first appearance
    pub stakeholders_by_role: Vec<CountEntry>,
}

/// Counts labels keeping first-appearance order.
fn count_in_order<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = Vec::new();
    for label in labels {
        match entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.count += 1,
            None => entries.push(CountEntry {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    entries
}

impl DashboardSummary {
    pub fn build(problems: &[Problem], solutions: &[Solution], stakeholders: &[Stakeholder]) -> Self {
        let by_category = count_in_order(problems.iter().map(|p| p.category.as_str()));

        let severity_counts = count_in_order(problems.iter().map(|p| p.severity.as_str()));
        let by_severity = Severity::ALL
            .iter()
            .filter_map(|s| severity_counts.iter().find(|e| e.label == s.label()).cloned())
            .collect();

        let mut monthly: BTreeMap<String, usize> = BTreeMap::new();
        for problem in problems {
            *monthly
                .entry(problem.submitted_at.format("%Y-%m").to_string())
                .or_insert(0) += 1;
        }
        let timeline = monthly
            .into_iter()
            .map(|(label, count)| CountEntry { label, count })
            .collect();

        let mut solutions_by_category: Vec<CountEntry> = Vec::new();
        for problem in problems {
            let proposed = solutions.iter().filter(|s| s.problem_id == problem.id).count();
            match solutions_by_category.iter_mut().find(|e| e.label == problem.category) {
                Some(entry) => entry.count += proposed,
                None => solutions_by_category.push(CountEntry {
                    label: problem.category.clone(),
                    count: proposed,
                }),
            }
        }

        let stakeholders_by_role = count_in_order(stakeholders.iter().map(|s| s.role.as_str()));

        Self {
            totals: Totals {
                problems: problems.len(),
                solutions: solutions.len(),
                stakeholders: stakeholders.len(),
            },
            by_category,
            by_severity,
            timeline,
            solutions_by_category,
            stakeholders_by_role,
        }
    }
}

/// The `n` most recently submitted problems, newest first
pub fn recent(problems: &[Problem], n: usize) -> Vec<&Problem> {
    let mut sorted: Vec<&Problem> = problems.iter().collect();
    sorted.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    sorted.truncate(n);
    sorted
}
