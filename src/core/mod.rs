// src/core/mod.rs
//! Service access and configuration shared by the CLI and the host page

pub mod config_manager;
pub mod service_client;

pub use config_manager::ConfigManager;
pub use service_client::{AnalysisService, ServiceClient, Unavailable};
