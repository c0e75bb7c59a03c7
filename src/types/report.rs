// src/types/report.rs
//! Analysis report returned by the remote analysis service.
//!
//! Every field is optional: the service may omit or null out any section and
//! the rendering pipeline must still produce a page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ===== Top-level document =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisReport {
    pub extracted_skills: Option<ExtractedSkills>,
    pub market_analysis: Option<MarketAnalysis>,
    pub skill_gaps: Option<SkillGaps>,
    pub github_analysis: Option<GithubAnalysis>,
    pub learning_plan: Option<LearningPlan>,
    pub overall_score: Option<f64>,
    pub recommendations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedSkills {
    pub technical_skills: Option<Vec<String>>,
    pub soft_skills: Option<Vec<String>>,
    pub experience_years: Option<f64>,
    pub education: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketAnalysis {
    pub top_skills: Option<Vec<String>>,
    pub emerging_skills: Option<Vec<String>>,
    pub industry_trends: Option<Vec<String>>,
    pub avg_salary_range: Option<SalaryRange>,
    pub market_demand: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGaps {
    pub missing_skills: Option<Vec<String>>,
    pub skills_to_improve: Option<Vec<String>>,
    pub recommended_certifications: Option<Vec<String>>,
    pub priority_level: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubAnalysis {
    /// Some services send whole counts as floats (`15.0`)
    pub total_repos: Option<f64>,
    pub languages_used: Option<Vec<String>>,
    pub project_quality_score: Option<f64>,
    pub improvement_suggestions: Option<Vec<String>>,
    /// Set by the service when the GitHub profile could not be analyzed.
    /// Kept raw because the service sends either a message or a flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl GithubAnalysis {
    /// True when `error` carries a truthy value (not null, false, "" or 0).
    pub fn is_unavailable(&self) -> bool {
        match &self.error {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(_) => true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningPlan {
    pub short_term_goals: Option<Vec<Goal>>,
    pub medium_term_goals: Option<Vec<Goal>>,
    pub long_term_goals: Option<Vec<Goal>>,
    pub recommended_resources: Option<Vec<Resource>>,
    pub estimated_timeline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goal {
    pub skill: Option<String>,
    pub priority: Option<String>,
    pub timeline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
}
