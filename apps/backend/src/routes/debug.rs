//! Debug/status routes: inspect known channels and their game state.

use actix_web::{web, HttpResponse};
use time::OffsetDateTime;

use crate::domain::snapshot::snapshot;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /debug/channels
///
/// Lists every channel id that has a game instance.
async fn list_channels(app_state: web::Data<AppState>) -> Result<web::Json<Vec<String>>, AppError> {
    let mut channels = app_state.registry.channels();
    channels.sort();
    Ok(web::Json(channels))
}

/// GET /debug/channel/{id}
///
/// Full snapshot of one channel's game. Looking up a channel must not create
/// a game for it, so this goes through `get`, not `load_or_create`.
async fn channel_snapshot(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let channel_id = path.into_inner();
    let game = app_state
        .registry
        .get(&channel_id)
        .ok_or_else(|| AppError::not_found(format!("no game for channel '{channel_id}'")))?;

    let snap = {
        let game = game.read();
        snapshot(&game, OffsetDateTime::now_utc())
    };

    Ok(HttpResponse::Ok().json(snap))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/debug")
            .route("/channels", web::get().to(list_channels))
            .route("/channel/{id}", web::get().to(channel_snapshot)),
    );
}
