//! Progress tracking over an engagement plan.

use serde::{Deserialize, Serialize};

use super::planner::{EngagementPlan, Phase};

/// An activity carried out under a plan phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub phase: Phase,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseProgress {
    pub phase: Phase,
    pub completed: usize,
    pub total: usize,
    /// 0.0 - 100.0
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub timeline_progress: Vec<PhaseProgress>,
    /// Mean of the phase percentages
    pub overall_progress: f64,
}

impl EngagementPlan {
    /// Completed activities per phase against the plan's action count.
    /// Completions beyond the number of planned actions do not push a phase past 100%.
    pub fn track_progress(&self, activities: &[Activity]) -> ProgressReport {
        let timeline_progress: Vec<PhaseProgress> = self
            .timeline
            .iter()
            .map(|phase| {
                let total = phase.actions.len();
                let done = activities
                    .iter()
                    .filter(|a| a.phase == phase.phase && a.completed)
                    .count();
                let completed = done.min(total);
                let percentage = if total > 0 {
                    completed as f64 / total as f64 * 100.0
                } else {
                    0.0
                };
                PhaseProgress {
                    phase: phase.phase,
                    completed,
                    total,
                    percentage,
                }
            })
            .collect();

        let overall_progress = if timeline_progress.is_empty() {
            0.0
        } else {
            timeline_progress.iter().map(|p| p.percentage).sum::<f64>()
                / timeline_progress.len() as f64
        };

        ProgressReport {
            timeline_progress,
            overall_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Severity;
    use crate::engagement::EngagementPlanner;

    fn done(phase: Phase) -> Activity {
        Activity {
            phase,
            description: String::new(),
            completed: true,
        }
    }

    #[test]
    fn test_no_activities_is_zero() {
        let plan = EngagementPlanner::new().plan("Economic", Severity::Low, &[]);
        let report = plan.track_progress(&[]);
        assert_eq!(report.timeline_progress.len(), 4);
        assert_eq!(report.overall_progress, 0.0);
    }

    #[test]
    fn test_partial_progress() {
        let plan = EngagementPlanner::new().plan("Economic", Severity::Low, &[]);
        let mut activities = vec![done(Phase::Immediate); 3];
        activities.push(Activity {
            phase: Phase::ShortTerm,
            description: "kickoff".to_string(),
            completed: false,
        });
        let report = plan.track_progress(&activities);
        assert_eq!(report.timeline_progress[0].percentage, 100.0);
        assert_eq!(report.timeline_progress[1].completed, 0);
        assert_eq!(report.overall_progress, 25.0);
    }

    #[test]
    fn test_critical_plan_has_more_immediate_actions() {
        let plan = EngagementPlanner::new().plan("Economic", Severity::Critical, &[]);
        let report = plan.track_progress(&vec![done(Phase::Immediate); 10]);
        let immediate = &report.timeline_progress[0];
        assert_eq!(immediate.total, 5);
        assert_eq!(immediate.completed, 5);
        assert_eq!(immediate.percentage, 100.0);
    }
}
