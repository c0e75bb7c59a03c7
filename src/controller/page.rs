// src/controller/page.rs
//! Explicit page state: the containers, panel visibility and form widgets.

use crate::render::view::{Node, Section, SectionId};
use crate::utils::format_kilobytes;
use serde::Serialize;
use std::collections::BTreeMap;

/// Scroll anchors on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Analyze,
    Results,
}

impl Anchor {
    pub fn element_id(self) -> &'static str {
        match self {
            Anchor::Analyze => "analyze",
            Anchor::Results => "results",
        }
    }
}

/// A resume file picked in the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    containers: BTreeMap<SectionId, Vec<Node>>,
    pub loading: bool,
    pub results_visible: bool,
    pub file_info: String,
    pub scroll_target: Option<Anchor>,
    /// Blocking alert from the last submission attempt
    pub alert: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        let containers = SectionId::ALL.iter().map(|id| (*id, Vec::new())).collect();
        Self {
            containers,
            loading: false,
            results_visible: false,
            file_info: String::new(),
            scroll_target: None,
            alert: None,
        }
    }

    /// Contents of one container. Every `SectionId` has a container.
    pub fn container(&self, id: SectionId) -> &[Node] {
        self.containers.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the content of each given container wholesale.
    pub fn apply(&mut self, sections: Vec<Section>) {
        for section in sections {
            self.containers.insert(section.id, section.nodes);
        }
    }

    /// Show the results panel and bring it into view
    pub fn show_results(&mut self) {
        self.results_visible = true;
        self.scroll_target = Some(Anchor::Results);
    }

    pub fn hide_results(&mut self) {
        self.results_visible = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Update the file-info label next to the resume input
    pub fn select_file(&mut self, file: Option<&SelectedFile>) {
        self.file_info = match file {
            Some(file) => format!(
                "Selected: {} ({})",
                file.name,
                format_kilobytes(file.size)
            ),
            None => String::new(),
        };
    }

    pub fn scroll_to_analyze(&mut self) {
        self.scroll_target = Some(Anchor::Analyze);
    }

    /// Clear the form, hide results and return to the submission section
    pub fn reset(&mut self) {
        self.file_info.clear();
        self.alert = None;
        self.hide_results();
        self.scroll_to_analyze();
    }

    /// Iterate containers in page order
    pub fn sections(&self) -> impl Iterator<Item = (SectionId, &[Node])> {
        SectionId::ALL.into_iter().map(|id| (id, self.container(id)))
    }
}
