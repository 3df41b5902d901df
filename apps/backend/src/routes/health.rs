use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::state::app_state::AppState;

const HELP_TEXT: &str = "/endpoint/ffstart
/endpoint/ffpause
/endpoint/ffend
/endpoint/ffjoin
/endpoint/fftarget
/endpoint/ffhit
/endpoint/ffdispute
/endpoint/ffscore
/endpoint/ffreset
";

/// GET / — plain-text list of the command endpoints.
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().body(HELP_TEXT)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    games: usize,
    time: String,
}

async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let now = OffsetDateTime::now_utc();
    let time = now
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        games: app_state.registry.len(),
        time,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Only configure the health route - the root route is wired separately
    // in main.rs.
    cfg.route("/health", web::get().to(health));
}
