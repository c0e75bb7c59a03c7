// src/web/handlers/analyze_handlers.rs
//! Form submission, reset and notification handlers for the host page.

use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::State;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::controller::{FormInput, SubmitError};
use crate::core::service_client::ResumeUpload;
use crate::render::html::render_page;
use crate::web::types::{AnalyzeForm, AppController};

const UPLOAD_FALLBACK_NAME: &str = "resume";

pub fn page_html(controller: &AppController) -> RawHtml<String> {
    RawHtml(render_page(
        &controller.page(),
        &controller.notifications().active(),
    ))
}

/// Original file name of an upload, without any client-side directory part
fn upload_file_name(file: &TempFile<'_>) -> String {
    file.raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str())
        .and_then(|raw| Path::new(raw).file_name())
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(UPLOAD_FALLBACK_NAME)
        .to_string()
}

async fn read_upload(file: &TempFile<'_>) -> std::io::Result<Vec<u8>> {
    let reader = file.open().await?;
    tokio::pin!(reader);
    let mut bytes = Vec::with_capacity(file.len() as usize);
    reader.read_to_end(&mut bytes).await?;
    Ok(bytes)
}

pub async fn submit_handler(
    form: Form<AnalyzeForm<'_>>,
    controller: &State<AppController>,
) -> (Status, RawHtml<String>) {
    // Browsers send an empty file part when nothing was picked
    let upload = form.resume.as_ref().filter(|file| file.len() > 0);

    let resume = match upload {
        Some(file) => match read_upload(file).await {
            Ok(bytes) => Some(ResumeUpload {
                file_name: upload_file_name(file),
                bytes,
            }),
            Err(e) => {
                error!("Failed to read uploaded resume: {}", e);
                return (Status::InternalServerError, page_html(controller));
            }
        },
        None => None,
    };

    let input = FormInput {
        resume,
        resume_text: form.resume_text.clone().unwrap_or_default(),
        github_url: form.github_url.clone().unwrap_or_default(),
    };

    match controller.submit(&input).await {
        Ok(outcome) => {
            info!("Submission rendered from {:?} report", outcome.source);
            (Status::Ok, page_html(controller))
        }
        Err(SubmitError::MissingResume) => {
            warn!("Submission rejected: no resume provided");
            (Status::BadRequest, page_html(controller))
        }
        Err(SubmitError::Busy) => {
            warn!("Submission rejected: analysis already in progress");
            (Status::Conflict, page_html(controller))
        }
    }
}

pub async fn reset_handler(controller: &State<AppController>) -> RawHtml<String> {
    controller.reset();
    page_html(controller)
}

pub async fn get_started_handler(controller: &State<AppController>) -> RawHtml<String> {
    controller.scroll_to_analyze();
    page_html(controller)
}

pub async fn dismiss_notification_handler(
    id: &str,
    controller: &State<AppController>,
) -> Status {
    let Ok(id) = Uuid::parse_str(id) else {
        return Status::NotFound;
    };

    if controller.notifications().dismiss(id) {
        Status::NoContent
    } else {
        Status::NotFound
    }
}
