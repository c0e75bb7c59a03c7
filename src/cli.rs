// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::controller::{FormController, FormInput, Notification, NotificationCenter, Page};
use crate::core::service_client::{AnalysisService, ResumeUpload};
use crate::core::{ConfigManager, ServiceClient};
use crate::render::html::render_page;
use crate::render::text::format_text_page;
use crate::sample::sample_report;

#[derive(Parser)]
#[command(name = "skillscope")]
#[command(about = "Submit a resume for career analysis and render the report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./skillscope.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis service
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a resume and print the rendered results
    Analyze {
        /// Resume file to upload (pdf, doc, docx, txt)
        #[arg(long)]
        resume: Option<PathBuf>,
        /// Resume text pasted inline
        #[arg(long, conflicts_with = "text_file")]
        text: Option<String>,
        /// Read resume text from a file
        #[arg(long)]
        text_file: Option<PathBuf>,
        /// GitHub profile URL
        #[arg(long)]
        github_url: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Render the built-in sample report without contacting the service
    Sample {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Serve the analysis form as a local web page
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Serialize)]
struct PageOutput<'a> {
    page: &'a Page,
    notifications: &'a [Notification],
}

pub fn render_output(
    page: &Page,
    notifications: &[Notification],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text_page(page, notifications)),
        OutputFormat::Html => Ok(render_page(page, notifications)),
        OutputFormat::Json => serde_json::to_string_pretty(&PageOutput {
            page,
            notifications,
        })
        .context("Failed to serialize page"),
    }
}

/// Read the resume file the way the form would upload it
pub async fn load_resume(path: &Path) -> Result<ResumeUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read resume file: {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume")
        .to_string();

    Ok(ResumeUpload { file_name, bytes })
}

async fn build_input(
    resume: Option<PathBuf>,
    text: Option<String>,
    text_file: Option<PathBuf>,
    github_url: Option<String>,
) -> Result<FormInput> {
    let resume = match resume {
        Some(path) => Some(load_resume(&path).await?),
        None => None,
    };

    let resume_text = match (text, text_file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read resume text: {}", path.display()))?,
        (None, None) => String::new(),
    };

    Ok(FormInput {
        resume,
        resume_text,
        github_url: github_url.unwrap_or_default(),
    })
}

/// Run one submission through the controller and render the resulting page
pub async fn run_analyze<S: AnalysisService>(
    controller: &FormController<S>,
    input: &FormInput,
    format: OutputFormat,
) -> Result<String> {
    let outcome = controller.submit(input).await?;
    info!("Rendered {:?} report", outcome.source);

    render_output(
        &controller.page(),
        &controller.notifications().active(),
        format,
    )
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let mut config = ConfigManager::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    match cli.command {
        Command::Analyze {
            resume,
            text,
            text_file,
            github_url,
            format,
        } => {
            let input = build_input(resume, text, text_file, github_url).await?;
            let client = ServiceClient::new(config.api_url.clone(), config.timeout_seconds)?;
            let controller = FormController::new(
                client,
                NotificationCenter::new(config.notification_ttl()),
                config.render_options(),
            );
            let output = run_analyze(&controller, &input, format).await?;
            print!("{}", output);
        }
        Command::Sample { format } => {
            let mut page = Page::new();
            page.apply(crate::render::build_sections(
                &sample_report(),
                config.render_options(),
            ));
            page.show_results();
            print!("{}", render_output(&page, &[], format)?);
        }
        Command::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            crate::web::start_web_server(config).await?;
        }
    }

    Ok(())
}
