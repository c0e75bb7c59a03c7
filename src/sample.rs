// src/sample.rs
//! Sample report shown in demo mode, when the analysis service is unavailable.

use crate::types::report::{
    AnalysisReport, ExtractedSkills, GithubAnalysis, Goal, LearningPlan, MarketAnalysis, Resource,
    SalaryRange, SkillGaps,
};
use std::collections::BTreeMap;

pub const DEMO_TITLE: &str = "Demo Mode";
pub const DEMO_MESSAGE: &str = "Backend not available. Showing sample analysis results.";

fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

fn goal(skill: &str, priority: &str, timeline: &str) -> Goal {
    Goal {
        skill: Some(skill.to_string()),
        priority: Some(priority.to_string()),
        timeline: Some(timeline.to_string()),
    }
}

fn resource(kind: &str, name: &str) -> Resource {
    Resource {
        kind: Some(kind.to_string()),
        name: Some(name.to_string()),
    }
}

/// Build the fixed sample report
pub fn sample_report() -> AnalysisReport {
    let priority_level = BTreeMap::from([
        (
            "Cloud Computing".to_string(),
            "Critical - Address within 3 months".to_string(),
        ),
        (
            "AI/ML".to_string(),
            "High - Address within 6 months".to_string(),
        ),
    ]);

    AnalysisReport {
        extracted_skills: Some(ExtractedSkills {
            technical_skills: strings(&["Python", "JavaScript", "React", "Node.js", "SQL"]),
            soft_skills: strings(&["Leadership", "Communication", "Problem Solving"]),
            experience_years: Some(3.0),
            education: strings(&["Bachelor's in Computer Science"]),
            certifications: strings(&["AWS Certified Developer"]),
        }),
        market_analysis: Some(MarketAnalysis {
            top_skills: strings(&["Python", "Cloud Computing", "AI/ML", "React", "DevOps"]),
            emerging_skills: strings(&["Generative AI", "LangChain", "Rust"]),
            industry_trends: strings(&[
                "AI/ML skills seeing 150% increase in demand",
                "Cloud expertise is critical for top positions",
            ]),
            avg_salary_range: Some(SalaryRange {
                min: Some(80000.0),
                max: Some(130000.0),
            }),
            market_demand: None,
        }),
        skill_gaps: Some(SkillGaps {
            missing_skills: strings(&["Cloud Computing", "AI/ML", "DevOps"]),
            skills_to_improve: strings(&["Advanced Python", "System Design"]),
            recommended_certifications: strings(&[
                "AWS Solutions Architect",
                "Google Cloud Professional",
            ]),
            priority_level: Some(priority_level),
        }),
        github_analysis: Some(GithubAnalysis {
            total_repos: Some(15.0),
            languages_used: strings(&["Python", "JavaScript", "TypeScript"]),
            project_quality_score: Some(72.5),
            improvement_suggestions: strings(&[
                "Add README files to all repositories",
                "Implement unit tests",
                "Set up CI/CD pipelines",
            ]),
            error: None,
        }),
        learning_plan: Some(LearningPlan {
            short_term_goals: Some(vec![goal("Cloud Computing", "Critical", "1-3 months")]),
            medium_term_goals: Some(vec![goal("AI/ML", "High", "3-6 months")]),
            long_term_goals: Some(vec![goal("System Architecture", "Medium", "6-12 months")]),
            recommended_resources: Some(vec![
                resource("Course", "AWS Solutions Architect Course"),
                resource("Practice", "LeetCode for algorithm practice"),
            ]),
            estimated_timeline: Some("6-9 months to reach top 1%".to_string()),
        }),
        overall_score: Some(68.5),
        recommendations: strings(&[
            "Learn Cloud Computing to improve market position",
            "Add comprehensive documentation to GitHub projects",
            "Focus on building AI/ML projects",
            "Current market position: High - Top 25% market position",
            "Network with professionals in your target industry",
        ]),
    }
}
