//! SkillScope: submits a resume to a career analysis service and renders the
//! returned report, falling back to a sample report when the service is down.

pub mod cli;
pub mod controller;
pub mod core;
pub mod render;
pub mod sample;
pub mod types;
pub mod utils;
pub mod web;

pub use controller::{FormController, FormInput, ReportSource, SubmitError, SubmitOutcome};
pub use crate::core::{AnalysisService, ConfigManager, ServiceClient, Unavailable};
pub use types::AnalysisReport;
