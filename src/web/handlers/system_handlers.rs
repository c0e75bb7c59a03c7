// src/web/handlers/system_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::debug;

use crate::web::types::*;

pub async fn page_snapshot_handler(controller: &State<AppController>) -> Json<PageSnapshot> {
    Json(PageSnapshot {
        page: controller.page(),
        notifications: controller.notifications().active(),
        busy: controller.is_busy(),
    })
}

pub async fn health_handler(config: &State<ServerConfig>) -> Json<HealthResponse> {
    debug!("Health check");
    Json(HealthResponse {
        status: "ok",
        service: config.api_url.clone(),
    })
}
