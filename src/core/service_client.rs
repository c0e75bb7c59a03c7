// src/core/service_client.rs
//! HTTP client for the remote analysis service.

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::types::report::AnalysisReport;
use crate::utils::content_type_for;

pub const ANALYZE_ENDPOINT: &str = "/api/analyze";

/// The service could not produce a report. Callers fall back to sample data.
#[derive(Debug, Error)]
pub enum Unavailable {
    #[error("analysis request failed: {0}")]
    Transport(String),
    #[error("analysis service returned status {0}")]
    Status(u16),
    #[error("analysis response could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Multipart fields sent to the service. Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub resume: Option<ResumeUpload>,
    pub resume_text: Option<String>,
    pub github_url: Option<String>,
}

impl AnalyzeRequest {
    /// Names of the parts that will be sent, in order
    pub fn part_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.resume.is_some() {
            names.push("resume");
        }
        if self.resume_text.is_some() {
            names.push("resume_text");
        }
        if self.github_url.is_some() {
            names.push("github_url");
        }
        names
    }

    fn into_form(self) -> Result<Form, Unavailable> {
        let mut form = Form::new();

        if let Some(resume) = self.resume {
            let mime = content_type_for(&resume.file_name);
            let part = Part::bytes(resume.bytes)
                .file_name(resume.file_name)
                .mime_str(mime)
                .map_err(|e| Unavailable::Transport(e.to_string()))?;
            form = form.part("resume", part);
        }
        if let Some(text) = self.resume_text {
            form = form.text("resume_text", text);
        }
        if let Some(url) = self.github_url {
            form = form.text("github_url", url);
        }

        Ok(form)
    }
}

pub trait AnalysisService {
    fn analyze(
        &self,
        request: AnalyzeRequest,
    ) -> impl Future<Output = Result<AnalysisReport, Unavailable>> + Send;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a client. Without a timeout the transport default applies.
    pub fn new(base_url: String, timeout_seconds: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_ENDPOINT)
    }
}

impl AnalysisService for ServiceClient {
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisReport, Unavailable> {
        let url = self.analyze_url();
        info!(
            "Calling analysis service: {} (parts: {:?})",
            url,
            request.part_names()
        );

        let form = request.into_form()?;
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Unavailable::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Unavailable::Status(status.as_u16()));
        }

        response
            .json::<AnalysisReport>()
            .await
            .map_err(|e| Unavailable::Decode(e.to_string()))
    }
}
