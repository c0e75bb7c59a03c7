// src/render/view.rs
//! View-model nodes produced by the rendering pipeline.
//!
//! Nodes are plain data. The text and HTML layers decide how they look.

use serde::{Deserialize, Serialize};

/// The fixed set of result containers on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    OverallScore,
    MarketPosition,
    Skills,
    MissingSkills,
    MarketInsights,
    GithubAnalysis,
    LearningPlan,
    Recommendations,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::OverallScore,
        SectionId::MarketPosition,
        SectionId::Skills,
        SectionId::MissingSkills,
        SectionId::MarketInsights,
        SectionId::GithubAnalysis,
        SectionId::LearningPlan,
        SectionId::Recommendations,
    ];

    /// Element id of the container in the host page
    pub fn container_id(self) -> &'static str {
        match self {
            SectionId::OverallScore => "overallScore",
            SectionId::MarketPosition => "marketPosition",
            SectionId::Skills => "skillsList",
            SectionId::MissingSkills => "missingSkills",
            SectionId::MarketInsights => "marketInsights",
            SectionId::GithubAnalysis => "githubAnalysis",
            SectionId::LearningPlan => "learningPlan",
            SectionId::Recommendations => "recommendationsList",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::OverallScore => "Overall Score",
            SectionId::MarketPosition => "Market Position",
            SectionId::Skills => "Your Skills",
            SectionId::MissingSkills => "Skills to Learn",
            SectionId::MarketInsights => "Market Insights",
            SectionId::GithubAnalysis => "GitHub Analysis",
            SectionId::LearningPlan => "Learning Plan",
            SectionId::Recommendations => "Recommendations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagStyle {
    /// Primary skill color
    Skill,
    /// Secondary color, used for soft skills
    SoftSkill,
    Missing,
}

impl TagStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            TagStyle::Skill => "skill-tag",
            TagStyle::SoftSkill => "skill-tag soft-skill",
            TagStyle::Missing => "missing-skill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    Bullet,
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Bare text, e.g. the score value
    Text { text: String },
    Tag { label: String, style: TagStyle },
    /// `label: value` line
    Field { label: String, value: String },
    List { style: ListStyle, items: Vec<String> },
    /// Titled group with its own list, used by the learning plan
    Subsection { title: String, items: Vec<String> },
    Paragraph { text: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn tag(label: impl Into<String>, style: TagStyle) -> Self {
        Node::Tag {
            label: label.into(),
            style,
        }
    }

    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph { text: text.into() }
    }
}

/// Rendered content for one container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub nodes: Vec<Node>,
}

impl Section {
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
