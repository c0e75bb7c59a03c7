// src/render/mod.rs
//! Report rendering: the section pipeline plus the text and HTML layers.

pub mod html;
pub mod sections;
pub mod text;
pub mod view;

pub use sections::{build_sections, RenderOptions};
pub use view::{ListStyle, Node, Section, SectionId, TagStyle};
