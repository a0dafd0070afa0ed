//! Test Module
//!
//! Cross-module test suite for the CivicPulse core.
//!
//! ## Test Categories
//! - `analysis_tests`: analyzer properties and submission scenarios
//! - `engagement_tests`: plans built from registered stakeholders
//! - `dashboard_tests`: count series over stored records
//! - `registry_tests`: submission workflow
//! - `integration_tests`: batch files, serialized analyses, full workflow

pub mod engagement_tests;
pub mod integration_tests;
pub mod registry_tests;
