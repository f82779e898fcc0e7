use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;

use crate::{constants::START_TIME, AppState};

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now();
    let uptime_seconds = now.signed_duration_since(*START_TIME).num_seconds();

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "storage": state.storage_mode.to_string(),
        "uptime_seconds": uptime_seconds,
        "timestamp": now.to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
