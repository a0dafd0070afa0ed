//! Engagement planner.
//!
//! Everything here is static-table expansion; no state is kept between plans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::analysis::{Category, Severity, StakeholderType};
use crate::models::{Problem, Stakeholder};

/// Stage of the engagement timeline, in chronological order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Immediate, Phase::ShortTerm, Phase::MediumTerm, Phase::LongTerm];

    pub fn timeframe(&self) -> &'static str {
        match self {
            Phase::Immediate => "0-7 days",
            Phase::ShortTerm => "1-4 weeks",
            Phase::MediumTerm => "1-3 months",
            Phase::LongTerm => "3-12 months",
        }
    }

    fn base_actions(&self) -> &'static [&'static str] {
        match self {
            Phase::Immediate => &[
                "Initial stakeholder notification",
                "Emergency response coordination",
                "Crisis communication setup",
            ],
            Phase::ShortTerm => &[
                "Stakeholder meetings and consultations",
                "Problem analysis and data collection",
                "Initial solution brainstorming",
            ],
            Phase::MediumTerm => &[
                "Solution development and testing",
                "Community feedback collection",
                "Implementation planning",
            ],
            Phase::LongTerm => &[
                "Solution implementation",
                "Monitoring and evaluation",
                "Continuous improvement",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub phase: Phase,
    pub timeframe: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementStrategy {
    pub communication: String,
    pub participation: String,
    pub collaboration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderContact {
    pub name: String,
    pub role: String,
    pub organization: Option<String>,
    pub contact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Weekly,
    #[serde(rename = "Bi-weekly")]
    BiWeekly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationPlan {
    pub primary_channels: Vec<String>,
    pub secondary_channels: Vec<String>,
    pub frequency: Frequency,
    pub key_messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricGroup {
    pub group: String,
    pub metrics: Vec<Metric>,
}

/// Complete outreach plan for one problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPlan {
    pub problem_category: String,
    pub severity: Severity,
    pub relevant_stakeholders: Vec<StakeholderContact>,
    pub timeline: Vec<TimelinePhase>,
    pub strategies: BTreeMap<StakeholderType, EngagementStrategy>,
    pub communication_plan: CommunicationPlan,
    pub success_metrics: Vec<MetricGroup>,
    pub created_at: DateTime<Utc>,
}

impl EngagementPlan {
    pub fn phase(&self, phase: Phase) -> Option<&TimelinePhase> {
        self.timeline.iter().find(|p| p.phase == phase)
    }
}

fn strategy_for(role: StakeholderType) -> EngagementStrategy {
    let (communication, participation, collaboration) = match role {
        StakeholderType::Government => (
            "Direct meetings with city officials and policy makers",
            "Public hearings and town hall meetings",
            "Policy development and implementation support",
        ),
        StakeholderType::CommunityGroups => (
            "Community forums and neighborhood meetings",
            "Local events and community activities",
            "Grassroots organizing and community building",
        ),
        StakeholderType::Business => (
            "Business roundtables and economic development meetings",
            "Corporate social responsibility initiatives",
            "Public-private partnerships and sponsorship",
        ),
        StakeholderType::Education => (
            "Educational workshops and seminars",
            "Student and faculty engagement programs",
            "Research partnerships and educational initiatives",
        ),
        StakeholderType::Healthcare => (
            "Health awareness campaigns and workshops",
            "Community health programs and screenings",
            "Public health initiatives and wellness programs",
        ),
        StakeholderType::Media => (
            "Press releases and media interviews",
            "Community journalism and storytelling",
            "Public awareness campaigns and information sharing",
        ),
        StakeholderType::Ngos => (
            "Advocacy campaigns and public education",
            "Volunteer programs and community service",
            "Program development and resource sharing",
        ),
    };
    EngagementStrategy {
        communication: communication.to_string(),
        participation: participation.to_string(),
        collaboration: collaboration.to_string(),
    }
}

/// Channels per role; the first two are primary.
fn channels_for(role: StakeholderType) -> &'static [&'static str] {
    match role {
        StakeholderType::Government => &[
            "Official meetings",
            "Public hearings",
            "Government websites",
            "Press releases",
        ],
        StakeholderType::CommunityGroups => {
            &["Community forums", "Social media", "Newsletters", "Local events"]
        }
        StakeholderType::Business => &[
            "Business meetings",
            "Corporate communications",
            "Industry publications",
        ],
        StakeholderType::Education => &[
            "Educational workshops",
            "Academic conferences",
            "Student organizations",
        ],
        StakeholderType::Healthcare => {
            &["Health forums", "Medical conferences", "Health publications"]
        }
        StakeholderType::Media => &[
            "Press conferences",
            "Media interviews",
            "News articles",
            "Social media",
        ],
        StakeholderType::Ngos => &[
            "Advocacy campaigns",
            "Community outreach",
            "Volunteer networks",
        ],
    }
}

/// Roles worth engaging for a category, most relevant first
pub fn relevant_roles(category: Category) -> &'static [StakeholderType] {
    use StakeholderType::*;
    match category {
        Category::SocialDivision => &[Government, CommunityGroups, Education, Media],
        Category::Disinformation => &[Media, Education, Government, Ngos],
        Category::CommunitySafety => &[Government, CommunityGroups, Business, Ngos],
        Category::Infrastructure => &[Government, Business, CommunityGroups],
        Category::Environment => &[Government, Ngos, Education, CommunityGroups],
        Category::Education => &[Education, Government, CommunityGroups, Ngos],
        Category::Healthcare => &[Healthcare, Government, Ngos, CommunityGroups],
        Category::Economic => &[Business, Government, Education, Ngos],
    }
}

fn key_messages(category: Option<Category>) -> &'static [&'static str] {
    match category {
        Some(Category::SocialDivision) => &[
            "Building bridges between communities",
            "Promoting understanding and dialogue",
            "Creating inclusive spaces for all voices",
        ],
        Some(Category::Disinformation) => &[
            "Fighting misinformation with facts",
            "Promoting media literacy and critical thinking",
            "Building trust through transparency",
        ],
        Some(Category::CommunitySafety) => &[
            "Creating safer neighborhoods together",
            "Building community resilience",
            "Empowering residents to take action",
        ],
        Some(Category::Infrastructure) => &[
            "Improving community infrastructure",
            "Building for the future",
            "Ensuring equitable access to services",
        ],
        Some(Category::Environment) => &[
            "Protecting our environment for future generations",
            "Building sustainable communities",
            "Taking action on climate change",
        ],
        Some(Category::Education) => &[
            "Investing in our children's future",
            "Building strong educational foundations",
            "Creating opportunities for all learners",
        ],
        Some(Category::Healthcare) => &[
            "Improving community health outcomes",
            "Ensuring access to quality healthcare",
            "Building healthier communities",
        ],
        Some(Category::Economic) => &[
            "Building economic opportunities",
            "Supporting local businesses and jobs",
            "Creating shared prosperity",
        ],
        None => &[
            "Working together for community solutions",
            "Building a better future for all",
            "Creating positive change through collaboration",
        ],
    }
}

fn metric_group(group: &str, metrics: &[(&str, &str)]) -> MetricGroup {
    MetricGroup {
        group: group.to_string(),
        metrics: metrics
            .iter()
            .map(|(name, description)| Metric {
                name: name.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

fn push_unique(target: &mut Vec<String>, value: &str) {
    if !target.iter().any(|v| v == value) {
        target.push(value.to_string());
    }
}

#[derive(Default)]
pub struct EngagementPlanner;

impl EngagementPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Builds a plan. `category` is the problem's label; unknown labels get
    /// no relevant stakeholders and the generic key messages.
    pub fn plan(&self, category: &str, severity: Severity, stakeholders: &[Stakeholder]) -> EngagementPlan {
        let known_category = Category::from_label(category);
        let roles = known_category.map(relevant_roles).unwrap_or_default();

        let relevant: Vec<(&Stakeholder, StakeholderType)> = stakeholders
            .iter()
            .filter_map(|s| StakeholderType::from_label(&s.role).map(|role| (s, role)))
            .filter(|(_, role)| roles.contains(role))
            .collect();

        let strategies = relevant
            .iter()
            .map(|(_, role)| (*role, strategy_for(*role)))
            .collect();

        let plan = EngagementPlan {
            problem_category: category.to_string(),
            severity,
            relevant_stakeholders: relevant
                .iter()
                .map(|(s, _)| StakeholderContact {
                    name: s.name.clone(),
                    role: s.role.clone(),
                    organization: s.organization.clone(),
                    contact: s.email.clone(),
                })
                .collect(),
            timeline: self.timeline(severity),
            strategies,
            communication_plan: self.communication_plan(known_category, &relevant),
            success_metrics: self.success_metrics(known_category),
            created_at: Utc::now(),
        };

        debug!(
            category,
            severity = %severity,
            relevant = plan.relevant_stakeholders.len(),
            "Engagement plan generated"
        );

        plan
    }

    /// Plan for a stored problem, using its declared severity (Low when unparseable).
    pub fn plan_for_problem(&self, problem: &Problem, stakeholders: &[Stakeholder]) -> EngagementPlan {
        let severity = Severity::from_label(&problem.severity).unwrap_or(Severity::Low);
        self.plan(&problem.category, severity, stakeholders)
    }

    fn timeline(&self, severity: Severity) -> Vec<TimelinePhase> {
        Phase::ALL
            .iter()
            .map(|phase| {
                let mut actions: Vec<String> =
                    phase.base_actions().iter().map(|a| a.to_string()).collect();
                if *phase == Phase::Immediate {
                    let extra: &[&str] = match severity {
                        Severity::Critical => &[
                            "Emergency stakeholder mobilization",
                            "Crisis management team activation",
                        ],
                        Severity::High => &[
                            "Priority stakeholder engagement",
                            "Accelerated response planning",
                        ],
                        Severity::Medium | Severity::Low => &[],
                    };
                    actions.extend(extra.iter().map(|a| a.to_string()));
                }
                TimelinePhase {
                    phase: *phase,
                    timeframe: phase.timeframe().to_string(),
                    actions,
                }
            })
            .collect()
    }

    fn communication_plan(
        &self,
        category: Option<Category>,
        relevant: &[(&Stakeholder, StakeholderType)],
    ) -> CommunicationPlan {
        let mut primary_channels = Vec::new();
        let mut secondary_channels = Vec::new();
        for (_, role) in relevant {
            let channels = channels_for(*role);
            let split = channels.len().min(2);
            for channel in &channels[..split] {
                push_unique(&mut primary_channels, channel);
            }
            for channel in &channels[split..] {
                push_unique(&mut secondary_channels, channel);
            }
        }

        let frequency = match category {
            Some(Category::SocialDivision) | Some(Category::Disinformation) => Frequency::Weekly,
            _ => Frequency::BiWeekly,
        };

        CommunicationPlan {
            primary_channels,
            secondary_channels,
            frequency,
            key_messages: key_messages(category).iter().map(|m| m.to_string()).collect(),
        }
    }

    fn success_metrics(&self, category: Option<Category>) -> Vec<MetricGroup> {
        let mut impact = metric_group(
            "impact",
            &[
                ("problem_resolution", "Progress toward problem resolution"),
                ("community_satisfaction", "Stakeholder satisfaction scores"),
                ("sustainable_change", "Long-term impact indicators"),
            ],
        );
        let specific = match category {
            Some(Category::SocialDivision) => {
                Some(("social_cohesion", "Measures of community unity and understanding"))
            }
            Some(Category::Disinformation) => {
                Some(("information_quality", "Reduction in misinformation spread"))
            }
            Some(Category::CommunitySafety) => {
                Some(("safety_improvement", "Reduction in safety incidents"))
            }
            _ => None,
        };
        if let Some((name, description)) = specific {
            impact.metrics.push(Metric {
                name: name.to_string(),
                description: description.to_string(),
            });
        }

        vec![
            metric_group(
                "participation",
                &[
                    ("stakeholder_attendance", "Percentage of invited stakeholders participating"),
                    ("community_engagement", "Number of community members involved"),
                    ("meeting_frequency", "Regular meeting attendance rates"),
                ],
            ),
            metric_group(
                "communication",
                &[
                    ("message_reach", "Number of people reached through communications"),
                    ("feedback_collection", "Amount of stakeholder feedback received"),
                    ("information_sharing", "Frequency of information updates"),
                ],
            ),
            metric_group(
                "collaboration",
                &[
                    ("solution_development", "Number of solutions proposed"),
                    ("implementation_progress", "Percentage of solutions implemented"),
                    ("partnership_formation", "Number of new partnerships created"),
                ],
            ),
            impact,
        ]
    }
}
