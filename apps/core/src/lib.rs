// CivicPulse core library
// Keyword analysis of community problems, engagement planning, dashboard counts

pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod engagement;
pub mod error;
pub mod models;
pub mod registry;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisResult, TextAnalyzer};
pub use error::{AppError, Result};
