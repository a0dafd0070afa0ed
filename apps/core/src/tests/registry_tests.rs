//! Registry Tests
//!
//! Submission workflow: problems, solutions, votes and stakeholders.

use crate::analysis::{AnalysisResult, Severity};
use crate::error::AppError;
use crate::models::{ProblemSubmission, SolutionProposal, StakeholderRegistration};
use crate::registry::CommunityRegistry;

pub(crate) fn submission(title: &str, description: &str, category: &str, severity: &str) -> ProblemSubmission {
    ProblemSubmission {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        severity: severity.to_string(),
        location: "Riverside".to_string(),
        submitted_by: "jordan".to_string(),
    }
}

pub(crate) fn proposal(title: &str) -> SolutionProposal {
    SolutionProposal {
        title: title.to_string(),
        description: format!("{} in detail", title),
        proposed_by: "alex".to_string(),
    }
}

pub(crate) fn registration(name: &str, role: &str) -> StakeholderRegistration {
    StakeholderRegistration {
        name: name.to_string(),
        email: format!("{}@example.org", name),
        role: role.to_string(),
        organization: Some(String::new()),
        interests: Some("parks".to_string()),
    }
}

#[cfg(test)]
mod problem_tests {
    use super::*;

    #[test]
    fn test_submit_problem_stores_analysis() {
        let mut registry = CommunityRegistry::new();
        let problem = registry
            .submit_problem(submission(
                "Emergency",
                "This is a critical safety crisis in our neighborhood",
                "Community Safety",
                "High",
            ))
            .unwrap();

        assert_eq!(problem.status, "Open");
        assert_eq!(problem.solution_count, 0);
        assert_eq!(problem.severity, "High");
        assert_eq!(problem.stakeholder_count, 1);

        let analysis = AnalysisResult::from_json(&problem.analysis).unwrap();
        assert_eq!(analysis.severity(), Severity::Critical);
        assert_eq!(registry.problem(&problem.id).unwrap(), &problem);
    }

    #[test]
    fn test_invalid_submission_rejected() {
        let mut registry = CommunityRegistry::new();
        let err = registry
            .submit_problem(submission("", "no title", "Economic", "Low"))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(registry.problems().is_empty());
    }

    #[test]
    fn test_lookup_errors() {
        let registry = CommunityRegistry::new();
        assert!(matches!(registry.problem("not-a-uuid"), Err(AppError::Validation(_))));
        let missing = uuid::Uuid::new_v4().to_string();
        assert!(matches!(registry.problem(&missing), Err(AppError::NotFound(_))));
    }
}

#[cfg(test)]
mod solution_tests {
    use super::*;

    #[test]
    fn test_solution_increments_count() {
        let mut registry = CommunityRegistry::new();
        let problem = registry
            .submit_problem(submission("Potholes", "Roads need maintenance", "Infrastructure", "Medium"))
            .unwrap();

        registry.submit_solution(&problem.id, proposal("Patch crew")).unwrap();
        registry.submit_solution(&problem.id, proposal("Resurface")).unwrap();

        assert_eq!(registry.problem(&problem.id).unwrap().solution_count, 2);
        assert_eq!(registry.solutions().len(), 2);
    }

    #[test]
    fn test_solution_for_missing_problem() {
        let mut registry = CommunityRegistry::new();
        let missing = uuid::Uuid::new_v4().to_string();
        let err = registry.submit_solution(&missing, proposal("Anything")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(registry.solutions().is_empty());
    }

    #[test]
    fn test_votes_order_solutions() {
        let mut registry = CommunityRegistry::new();
        let problem = registry
            .submit_problem(submission("Litter", "waste in the park", "Environment", "Low"))
            .unwrap();
        let first = registry.submit_solution(&problem.id, proposal("More bins")).unwrap();
        let second = registry.submit_solution(&problem.id, proposal("Cleanup day")).unwrap();
        let third = registry.submit_solution(&problem.id, proposal("Fines")).unwrap();

        assert_eq!(registry.vote_solution(&second.id).unwrap(), 1);
        assert_eq!(registry.vote_solution(&second.id).unwrap(), 2);
        assert_eq!(registry.vote_solution(&third.id).unwrap(), 1);

        let ordered: Vec<&str> = registry
            .solutions_for(&problem.id)
            .unwrap()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ordered, vec![second.id.as_str(), third.id.as_str(), first.id.as_str()]);
    }

    #[test]
    fn test_vote_missing_solution() {
        let mut registry = CommunityRegistry::new();
        let missing = uuid::Uuid::new_v4().to_string();
        assert!(matches!(registry.vote_solution(&missing), Err(AppError::NotFound(_))));
    }
}

#[cfg(test)]
mod stakeholder_tests {
    use super::*;

    #[test]
    fn test_join_normalizes_empty_optionals() {
        let mut registry = CommunityRegistry::new();
        let stakeholder = registry.join_stakeholder(registration("riley", "NGOs")).unwrap();
        assert!(stakeholder.organization.is_none());
        assert_eq!(stakeholder.interests.as_deref(), Some("parks"));
        assert_eq!(registry.stakeholders().len(), 1);
    }

    #[test]
    fn test_join_rejects_bad_email() {
        let mut registry = CommunityRegistry::new();
        let mut reg = registration("riley", "NGOs");
        reg.email = "riley-at-example".to_string();
        assert!(matches!(registry.join_stakeholder(reg), Err(AppError::Validation(_))));
    }
}
