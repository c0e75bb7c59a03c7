// src/web/mod.rs
//! Locally served host page for the analysis form.

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catchers, get, post, routes, Build, Request, Rocket, State};
use tracing::info;

use crate::controller::{FormController, NotificationCenter};
use crate::core::{ConfigManager, ServiceClient};
use crate::render::html::esc;

#[get("/")]
pub async fn index(controller: &State<AppController>) -> RawHtml<String> {
    handlers::page_html(controller)
}

#[post("/submit", data = "<form>")]
pub async fn submit(
    form: Form<AnalyzeForm<'_>>,
    controller: &State<AppController>,
) -> (Status, RawHtml<String>) {
    handlers::submit_handler(form, controller).await
}

#[post("/reset")]
pub async fn reset(controller: &State<AppController>) -> RawHtml<String> {
    handlers::reset_handler(controller).await
}

#[post("/get-started")]
pub async fn get_started(controller: &State<AppController>) -> RawHtml<String> {
    handlers::get_started_handler(controller).await
}

#[post("/notifications/<id>/dismiss")]
pub async fn dismiss_notification(id: &str, controller: &State<AppController>) -> Status {
    handlers::dismiss_notification_handler(id, controller).await
}

#[get("/api/page")]
pub async fn page_snapshot(controller: &State<AppController>) -> Json<PageSnapshot> {
    handlers::page_snapshot_handler(controller).await
}

#[get("/health")]
pub async fn health(config: &State<ServerConfig>) -> Json<HealthResponse> {
    handlers::health_handler(config).await
}

fn error_page(status: Status, message: &str) -> RawHtml<String> {
    RawHtml(format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{code}</title></head>\
         <body><h1>{code} {reason}</h1><p>{message}</p><p><a href=\"/\">Back to the analysis form</a></p></body></html>",
        code = status.code,
        reason = status.reason().unwrap_or("Error"),
        message = esc(message),
    ))
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> RawHtml<String> {
    error_page(Status::BadRequest, "The submitted form could not be read.")
}

#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> RawHtml<String> {
    error_page(
        Status::NotFound,
        &format!("Nothing is served at {}.", request.uri().path()),
    )
}

#[rocket::catch(500)]
pub fn internal_error() -> RawHtml<String> {
    error_page(
        Status::InternalServerError,
        "Something went wrong. Try again in a few moments.",
    )
}

/// Assemble the Rocket instance around a ready controller
pub fn build_rocket(controller: AppController, config: &ConfigManager) -> Rocket<Build> {
    let limits = Limits::default()
        .limit("file", 10.mebibytes())
        .limit("data-form", 12.mebibytes());

    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("limits", limits));

    rocket::custom(figment)
        .manage(controller)
        .manage(ServerConfig {
            api_url: config.api_url.clone(),
        })
        .register("/", catchers![bad_request, not_found, internal_error])
        .mount(
            "/",
            routes![
                index,
                submit,
                reset,
                get_started,
                dismiss_notification,
                page_snapshot,
                health,
            ],
        )
}

/// Build the controller from configuration
pub fn build_controller(config: &ConfigManager) -> Result<AppController> {
    let client = ServiceClient::new(config.api_url.clone(), config.timeout_seconds)?;
    Ok(FormController::new(
        client,
        NotificationCenter::new(config.notification_ttl()),
        config.render_options(),
    ))
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let controller = build_controller(&config)?;

    info!("Starting SkillScope host page on port {}", config.port);
    info!("Analysis service: {}", config.api_url);

    let _rocket = build_rocket(controller, &config)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
