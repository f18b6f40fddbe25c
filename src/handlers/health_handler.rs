use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState, constants::prompts::SERVICE_STATUS, models::dto::response::StatusResponse,
};

#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse::new(SERVICE_STATUS))
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let notes_health = state.note_service.health_check().await;
    if let Err(err) = &notes_health {
        log::warn!("Notes backend not ready: {}", err);
    }

    let status = if notes_health.is_ok() {
        "ready"
    } else {
        "not_ready"
    };

    let mut dependencies = serde_json::Map::new();
    dependencies.insert(
        state.config.notes_backend.name().to_string(),
        serde_json::json!(if notes_health.is_ok() { "ok" } else { "error" }),
    );

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": dependencies
    });

    if notes_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
