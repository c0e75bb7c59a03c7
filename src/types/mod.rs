// src/types/mod.rs
pub mod report;

pub use report::AnalysisReport;
