// src/render/sections.rs
//! Rendering pipeline: maps each report section onto its page container.

use super::view::{ListStyle, Node, Section, SectionId, TagStyle};
use crate::types::report::{
    AnalysisReport, ExtractedSkills, GithubAnalysis, Goal, LearningPlan, MarketAnalysis, SkillGaps,
};
use crate::utils::{format_thousands, round_score};

pub const MAX_MISSING_SKILLS: usize = 10;
pub const MAX_GITHUB_SUGGESTIONS: usize = 3;

const NOT_AVAILABLE: &str = "N/A";
const MARKET_POSITION_NEEDLE: &str = "market position";
const MARKET_POSITION_PENDING: &str = "Processing...";
pub const GITHUB_UNAVAILABLE: &str = "GitHub analysis not available";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Also render long-term goals and recommended resources
    pub extended_learning_plan: bool,
}

/// Build every section of the page from a report. The report is only read.
pub fn build_sections(report: &AnalysisReport, options: RenderOptions) -> Vec<Section> {
    vec![
        overall_score(report),
        market_position(report),
        skills(report.extracted_skills.as_ref()),
        missing_skills(report.skill_gaps.as_ref()),
        market_insights(report.market_analysis.as_ref()),
        github_analysis(report.github_analysis.as_ref()),
        learning_plan(report.learning_plan.as_ref(), options),
        recommendations(report.recommendations.as_deref()),
    ]
}

pub fn overall_score(report: &AnalysisReport) -> Section {
    let mut section = Section::new(SectionId::OverallScore);
    let score = round_score(report.overall_score.unwrap_or(0.0));
    section.push(Node::text(score.to_string()));
    section
}

pub fn market_position(report: &AnalysisReport) -> Section {
    let mut section = Section::new(SectionId::MarketPosition);

    let from_market = report
        .market_analysis
        .as_ref()
        .and_then(|m| m.market_demand.as_deref())
        .filter(|demand| !demand.is_empty());

    let from_recommendations = || {
        report
            .recommendations
            .as_ref()
            .and_then(|recs| recs.iter().find(|r| r.contains(MARKET_POSITION_NEEDLE)))
            .map(String::as_str)
    };

    let position = from_market
        .or_else(from_recommendations)
        .unwrap_or(MARKET_POSITION_PENDING);

    section.push(Node::text(position));
    section
}

pub fn skills(skills: Option<&ExtractedSkills>) -> Section {
    let mut section = Section::new(SectionId::Skills);
    let Some(skills) = skills else {
        return section;
    };

    for skill in skills.technical_skills.iter().flatten() {
        section.push(Node::tag(skill, TagStyle::Skill));
    }
    for skill in skills.soft_skills.iter().flatten() {
        section.push(Node::tag(skill, TagStyle::SoftSkill));
    }
    section
}

pub fn missing_skills(gaps: Option<&SkillGaps>) -> Section {
    let mut section = Section::new(SectionId::MissingSkills);
    let missing = gaps.and_then(|g| g.missing_skills.as_ref());

    for skill in missing.into_iter().flatten().take(MAX_MISSING_SKILLS) {
        section.push(Node::tag(skill, TagStyle::Missing));
    }
    section
}

pub fn market_insights(market: Option<&MarketAnalysis>) -> Section {
    let mut section = Section::new(SectionId::MarketInsights);
    let Some(market) = market else {
        return section;
    };

    if let Some(trends) = &market.industry_trends {
        section.push(Node::List {
            style: ListStyle::Bullet,
            items: trends.clone(),
        });
    }

    if let Some(range) = &market.avg_salary_range {
        let bound = |v: Option<f64>| {
            v.map(|v| format!("${}", format_thousands(v)))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        section.push(Node::field(
            "Salary Range",
            format!("{} - {}", bound(range.min), bound(range.max)),
        ));
    }
    section
}

pub fn github_analysis(github: Option<&GithubAnalysis>) -> Section {
    let mut section = Section::new(SectionId::GithubAnalysis);

    let github = match github {
        Some(github) if !github.is_unavailable() => github,
        _ => {
            section.push(Node::paragraph(GITHUB_UNAVAILABLE));
            return section;
        }
    };

    // A count of zero reads as missing. Whole floats print without a fraction.
    let repos = github
        .total_repos
        .filter(|n| *n != 0.0 && !n.is_nan())
        .map(|n| n.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let languages = github
        .languages_used
        .as_ref()
        .filter(|langs| !langs.is_empty())
        .map(|langs| langs.join(", "))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let quality = github
        .project_quality_score
        .filter(|score| score.is_finite())
        .map(|score| format!("{:.1}", score))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    section.push(Node::field("Total Repos", repos));
    section.push(Node::field("Languages", languages));
    section.push(Node::field("Quality Score", format!("{}/100", quality)));

    if let Some(suggestions) = &github.improvement_suggestions {
        section.push(Node::List {
            style: ListStyle::Bullet,
            items: suggestions
                .iter()
                .take(MAX_GITHUB_SUGGESTIONS)
                .cloned()
                .collect(),
        });
    }
    section
}

fn goal_line(goal: &Goal) -> String {
    format!(
        "{} - {}",
        goal.skill.as_deref().unwrap_or(NOT_AVAILABLE),
        goal.priority.as_deref().unwrap_or(NOT_AVAILABLE)
    )
}

fn goal_subsection(section: &mut Section, title: &str, goals: Option<&Vec<Goal>>) {
    if let Some(goals) = goals.filter(|g| !g.is_empty()) {
        section.push(Node::Subsection {
            title: title.to_string(),
            items: goals.iter().map(goal_line).collect(),
        });
    }
}

pub fn learning_plan(plan: Option<&LearningPlan>, options: RenderOptions) -> Section {
    let mut section = Section::new(SectionId::LearningPlan);
    let Some(plan) = plan else {
        return section;
    };

    goal_subsection(
        &mut section,
        "Short Term (1-3 months)",
        plan.short_term_goals.as_ref(),
    );
    goal_subsection(
        &mut section,
        "Medium Term (3-6 months)",
        plan.medium_term_goals.as_ref(),
    );

    if options.extended_learning_plan {
        goal_subsection(
            &mut section,
            "Long Term (6-12 months)",
            plan.long_term_goals.as_ref(),
        );

        if let Some(resources) = plan.recommended_resources.as_ref().filter(|r| !r.is_empty()) {
            section.push(Node::Subsection {
                title: "Recommended Resources".to_string(),
                items: resources
                    .iter()
                    .map(|r| {
                        format!(
                            "{}: {}",
                            r.kind.as_deref().unwrap_or("Resource"),
                            r.name.as_deref().unwrap_or(NOT_AVAILABLE)
                        )
                    })
                    .collect(),
            });
        }
    }

    if let Some(timeline) = plan.estimated_timeline.as_deref().filter(|t| !t.is_empty()) {
        section.push(Node::field("Timeline to Top 1%", timeline));
    }
    section
}

pub fn recommendations(recommendations: Option<&[String]>) -> Section {
    let mut section = Section::new(SectionId::Recommendations);
    if let Some(recs) = recommendations.filter(|r| !r.is_empty()) {
        section.push(Node::List {
            style: ListStyle::Numbered,
            items: recs.to_vec(),
        });
    }
    section
}
