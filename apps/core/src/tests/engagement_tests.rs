//! Engagement Tests
//!
//! Plans built from a registry's problems and stakeholders.

use super::registry_tests::{registration, submission};
use crate::analysis::{Severity, StakeholderType};
use crate::engagement::{Activity, EngagementPlanner, Frequency, Phase};
use crate::registry::CommunityRegistry;

#[cfg(test)]
mod plan_tests {
    use super::*;

    #[test]
    fn test_plan_for_registered_problem() {
        let mut registry = CommunityRegistry::new();
        let problem = registry
            .submit_problem(submission(
                "Clinic closing",
                "The only clinic is closing, a serious problem",
                "Healthcare",
                "High",
            ))
            .unwrap();
        for (name, role) in [("ada", "Healthcare"), ("ben", "Media"), ("cleo", "NGOs")] {
            registry.join_stakeholder(registration(name, role)).unwrap();
        }

        let plan = EngagementPlanner::new().plan_for_problem(&problem, registry.stakeholders());

        assert_eq!(plan.severity, Severity::High);
        assert_eq!(plan.problem_category, "Healthcare");
        let roles: Vec<&str> = plan.relevant_stakeholders.iter().map(|s| s.role.as_str()).collect();
        assert_eq!(roles, vec!["Healthcare", "NGOs"]);
        assert_eq!(plan.relevant_stakeholders[0].contact, "ada@example.org");
        assert!(plan.strategies.contains_key(&StakeholderType::Ngos));
        assert!(!plan.strategies.contains_key(&StakeholderType::Media));
        assert_eq!(plan.communication_plan.frequency, Frequency::BiWeekly);
        assert_eq!(plan.phase(Phase::Immediate).unwrap().actions.len(), 5);
    }

    #[test]
    fn test_unparseable_declared_severity_falls_back_to_low() {
        let mut registry = CommunityRegistry::new();
        let problem = registry
            .submit_problem(submission("Bins", "waste", "Environment", "Whenever"))
            .unwrap();
        let plan = EngagementPlanner::new().plan_for_problem(&problem, &[]);
        assert_eq!(plan.severity, Severity::Low);
        assert_eq!(plan.phase(Phase::Immediate).unwrap().actions.len(), 3);
    }

    #[test]
    fn test_plan_serializes_phases_and_frequency() {
        let plan = EngagementPlanner::new().plan("Social Division", Severity::Critical, &[]);
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["timeline"][1]["phase"], "short_term");
        assert_eq!(value["communication_plan"]["frequency"], "Weekly");
        assert_eq!(value["severity"], "Critical");

        let plan = EngagementPlanner::new().plan("Economic", Severity::Low, &[]);
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["communication_plan"]["frequency"], "Bi-weekly");
    }

    #[test]
    fn test_progress_from_json_activities() {
        let plan = EngagementPlanner::new().plan("Education", Severity::Medium, &[]);
        let activities: Vec<Activity> = serde_json::from_str(
            r#"[
                {"phase": "immediate", "completed": true},
                {"phase": "immediate", "completed": true},
                {"phase": "long_term", "completed": true, "description": "evaluation"},
                {"phase": "short_term"}
            ]"#,
        )
        .unwrap();
        let report = plan.track_progress(&activities);
        let immediate = &report.timeline_progress[0];
        assert_eq!(immediate.completed, 2);
        assert!((immediate.percentage - 66.666).abs() < 0.01);
        assert!((report.overall_progress - 25.0).abs() < 0.01);
    }
}
