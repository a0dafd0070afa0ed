//! In-memory store for the submission workflow: problems (analyzed on
//! submission), solutions with votes, and registered stakeholders.

use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::analysis::TextAnalyzer;
use crate::dashboard::{self, DashboardSummary};
use crate::error::{AppError, Result};
use crate::models::{
    Problem, ProblemSubmission, Solution, SolutionProposal, Stakeholder, StakeholderRegistration,
    DEFAULT_PROBLEM_STATUS, DEFAULT_SOLUTION_STATUS,
};

pub struct CommunityRegistry {
    analyzer: &'static TextAnalyzer,
    problems: Vec<Problem>,
    solutions: Vec<Solution>,
    stakeholders: Vec<Stakeholder>,
}

impl Default for CommunityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_id(id: &str) -> Result<Uuid> {
    Ok(Uuid::parse_str(id)?)
}

impl CommunityRegistry {
    pub fn new() -> Self {
        Self {
            analyzer: TextAnalyzer::shared(),
            problems: Vec::new(),
            solutions: Vec::new(),
            stakeholders: Vec::new(),
        }
    }

    // --- Problems ---

    /// Validates, analyzes and stores a problem. The analysis is stored as JSON.
    pub fn submit_problem(&mut self, submission: ProblemSubmission) -> Result<Problem> {
        submission.validate()?;

        let analysis = self
            .analyzer
            .analyze(&submission.title, &submission.description, &submission.category);

        let problem = Problem {
            id: Uuid::new_v4().to_string(),
            title: submission.title,
            description: submission.description,
            category: submission.category,
            severity: submission.severity,
            location: submission.location,
            submitted_by: submission.submitted_by,
            submitted_at: Utc::now(),
            status: DEFAULT_PROBLEM_STATUS.to_string(),
            stakeholder_count: analysis.stakeholders.total_types as u32,
            solution_count: 0,
            analysis: analysis.to_json()?,
        };

        info!(
            problem_id = %problem.id,
            category = %problem.category,
            assessed = %analysis.severity(),
            "Problem submitted"
        );

        self.problems.push(problem.clone());
        Ok(problem)
    }

    pub fn problem(&self, id: &str) -> Result<&Problem> {
        parse_id(id)?;
        self.problems
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("problem {}", id)))
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    // --- Solutions ---

    pub fn submit_solution(&mut self, problem_id: &str, proposal: SolutionProposal) -> Result<Solution> {
        proposal.validate()?;
        parse_id(problem_id)?;

        let problem = self
            .problems
            .iter_mut()
            .find(|p| p.id == problem_id)
            .ok_or_else(|| AppError::NotFound(format!("problem {}", problem_id)))?;

        let solution = Solution {
            id: Uuid::new_v4().to_string(),
            problem_id: problem_id.to_string(),
            title: proposal.title,
            description: proposal.description,
            proposed_by: proposal.proposed_by,
            proposed_at: Utc::now(),
            votes: 0,
            status: DEFAULT_SOLUTION_STATUS.to_string(),
        };
        problem.solution_count += 1;

        info!(problem_id, solution_id = %solution.id, "Solution submitted");

        self.solutions.push(solution.clone());
        Ok(solution)
    }

    /// Adds one vote and returns the new total.
    pub fn vote_solution(&mut self, solution_id: &str) -> Result<u32> {
        parse_id(solution_id)?;
        let solution = self
            .solutions
            .iter_mut()
            .find(|s| s.id == solution_id)
            .ok_or_else(|| AppError::NotFound(format!("solution {}", solution_id)))?;
        solution.votes += 1;
        Ok(solution.votes)
    }

    /// Solutions of a problem, most voted first (ties keep submission order).
    pub fn solutions_for(&self, problem_id: &str) -> Result<Vec<&Solution>> {
        self.problem(problem_id)?;
        let mut found: Vec<&Solution> = self
            .solutions
            .iter()
            .filter(|s| s.problem_id == problem_id)
            .collect();
        found.sort_by(|a, b| b.votes.cmp(&a.votes));
        Ok(found)
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    // --- Stakeholders ---

    pub fn join_stakeholder(&mut self, registration: StakeholderRegistration) -> Result<Stakeholder> {
        registration.validate()?;

        let stakeholder = Stakeholder {
            id: Uuid::new_v4().to_string(),
            name: registration.name,
            email: registration.email,
            role: registration.role,
            organization: registration.organization.filter(|o| !o.is_empty()),
            interests: registration.interests.filter(|i| !i.is_empty()),
            joined_at: Utc::now(),
        };

        info!(stakeholder_id = %stakeholder.id, role = %stakeholder.role, "Stakeholder joined");

        self.stakeholders.push(stakeholder.clone());
        Ok(stakeholder)
    }

    pub fn stakeholders(&self) -> &[Stakeholder] {
        &self.stakeholders
    }

    // --- Views ---

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::build(&self.problems, &self.solutions, &self.stakeholders)
    }

    pub fn recent_problems(&self, n: usize) -> Vec<&Problem> {
        dashboard::recent(&self.problems, n)
    }
}

/// Reads a JSON array of submissions from disk.
pub fn load_submissions(path: &Path) -> Result<Vec<ProblemSubmission>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
