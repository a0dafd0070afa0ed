//! Integration Tests
//!
//! Batch files through the registry, stored analyses read back for display.

use std::io::Write;

use crate::analysis::{AnalysisResult, Category, Severity};
use crate::engagement::EngagementPlanner;
use crate::error::AppError;
use crate::registry::{load_submissions, CommunityRegistry};

const BATCH: &str = r#"[
    {
        "title": "Emergency",
        "description": "This is a critical safety crisis in our neighborhood",
        "category": "Community Safety",
        "severity": "Critical",
        "location": "North End",
        "submitted_by": "pat"
    },
    {
        "title": "Misinformation",
        "description": "fake news about the school vaccination program",
        "category": "Disinformation",
        "severity": "High",
        "location": "Downtown",
        "submitted_by": "quinn"
    },
    {
        "title": "",
        "description": "missing title is rejected",
        "category": "Economic",
        "severity": "Low",
        "location": "Nowhere",
        "submitted_by": "robin"
    }
]"#;

#[cfg(test)]
mod workflow_tests {
    use super::*;

    #[test]
    fn test_batch_file_through_registry() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BATCH.as_bytes()).unwrap();

        let submissions = load_submissions(file.path()).unwrap();
        assert_eq!(submissions.len(), 3);

        let mut registry = CommunityRegistry::new();
        let results: Vec<_> = submissions
            .into_iter()
            .map(|s| registry.submit_problem(s))
            .collect();
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(AppError::Validation(_))));

        let stored: Vec<AnalysisResult> = registry
            .problems()
            .iter()
            .map(|p| AnalysisResult::from_json(&p.analysis).unwrap())
            .collect();
        assert_eq!(stored[0].severity(), Severity::Critical);
        assert_eq!(stored[1].category_confidence.best_match, Category::Disinformation);
        assert_eq!(stored[1].recommendations.recommendations.len(), 3);

        let summary = registry.dashboard();
        assert_eq!(summary.totals.problems, 2);
        assert_eq!(summary.by_severity[0].label, "Critical");

        let plan = EngagementPlanner::new().plan_for_problem(&registry.problems()[0], registry.stakeholders());
        assert_eq!(plan.severity, Severity::Critical);
    }

    #[test]
    fn test_missing_batch_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_submissions(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_malformed_batch_file_is_validation_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"an array\"}").unwrap();
        let err = load_submissions(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
