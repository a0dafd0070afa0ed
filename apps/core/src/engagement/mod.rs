//! # Engagement Module
//!
//! Turns a problem's category and severity plus the registered stakeholders
//! into an outreach plan (timeline, strategies, channels, metrics), and
//! tracks completion of that plan.

pub mod planner;
pub mod progress;

pub use planner::{
    CommunicationPlan, EngagementPlan, EngagementPlanner, EngagementStrategy, Frequency, Metric,
    MetricGroup, Phase, StakeholderContact, TimelinePhase,
};
pub use progress::{Activity, PhaseProgress, ProgressReport};
