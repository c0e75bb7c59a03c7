// src/web/types.rs
use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::Serialize;

use crate::controller::{FormController, Notification, Page};
use crate::core::ServiceClient;

/// Controller shared by every request to the host page
pub type AppController = FormController<ServiceClient>;

/// Multipart body posted by the analyze form
#[derive(FromForm)]
pub struct AnalyzeForm<'f> {
    pub resume: Option<TempFile<'f>>,
    pub resume_text: Option<String>,
    pub github_url: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct PageSnapshot {
    pub page: Page,
    pub notifications: Vec<Notification>,
    pub busy: bool,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

/// Immutable server settings
pub struct ServerConfig {
    pub api_url: String,
}
