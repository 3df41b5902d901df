//! Slash-command HTTP routes.
//!
//! One POST route per command, mirroring the Slack slash-command contract:
//! the body is a urlencoded [`SlashCommand`], the response is always HTTP 200
//! with a [`SlackResponse`] payload. Game rule violations come back as
//! ephemeral messages; announcements go to the channel.
//!
//! Each handler resolves the caller's channel to a game instance and holds
//! that game's lock for the whole operation: read for queries, write for
//! mutations.

use std::time::Instant;

use actix_web::{web, HttpResponse};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::protocol::slack::{
    final_scoreboard, live_scoreboard, mention, SlackResponse, SlashCommand,
};
use crate::state::app_state::AppState;

/// POST /endpoint/ffstart
async fn start(form: web::Form<SlashCommand>, app_state: web::Data<AppState>) -> HttpResponse {
    let started = Instant::now();
    let cmd = form.into_inner();
    let game = app_state.registry.load_or_create(&cmd.channel_id);

    // Shuffle fairness needs unpredictable seeding, not a cryptographic
    // stream: a ChaCha8 generator seeded from the OS does both cheaply.
    let mut rng = ChaCha8Rng::from_os_rng();
    let response = match game.write().start(&mut rng) {
        Ok(()) => SlackResponse::in_channel("FireFight Started!"),
        Err(err) => SlackResponse::ephemeral(err.to_string()),
    };

    respond(&cmd, started, response)
}

/// POST /endpoint/ffpause
async fn pause(form: web::Form<SlashCommand>, app_state: web::Data<AppState>) -> HttpResponse {
    let started = Instant::now();
    let cmd = form.into_inner();
    let game = app_state.registry.load_or_create(&cmd.channel_id);

    let response = match game.write().pause() {
        Ok(()) => SlackResponse::in_channel("[Paused] Ceasefire!"),
        Err(err) => SlackResponse::ephemeral(err.to_string()),
    };

    respond(&cmd, started, response)
}

/// POST /endpoint/ffend
async fn end(form: web::Form<SlashCommand>, app_state: web::Data<AppState>) -> HttpResponse {
    let started = Instant::now();
    let cmd = form.into_inner();
    let game = app_state.registry.load_or_create(&cmd.channel_id);

    let response = match game.write().end() {
        Ok(scoreboard) => SlackResponse::in_channel(final_scoreboard(&scoreboard)),
        Err(err) => SlackResponse::ephemeral(err.to_string()),
    };

    respond(&cmd, started, response)
}

/// POST /endpoint/ffjoin
async fn join(form: web::Form<SlashCommand>, app_state: web::Data<AppState>) -> HttpResponse {
    let started = Instant::now();
    let cmd = form.into_inner();
    let game = app_state.registry.load_or_create(&cmd.channel_id);

    let response = match game.write().join(&cmd.user_id) {
        Ok(()) => SlackResponse::ephemeral("You've joined the fight!"),
        Err(err) => SlackResponse::ephemeral(err.to_string()),
    };

    respond(&cmd, started, response)
}

/// POST /endpoint/fftarget
async fn target(form: web::Form<SlashCommand>, app_state: web::Data<AppState>) -> HttpResponse {
    let started = Instant::now();
    let cmd = form.into_inner();
    let game = app_state.registry.load_or_create(&cmd.channel_id);

    let response = {
        let game = game.read();
        match game.get_target(&cmd.user_id, OffsetDateTime::now_utc()) {
            Ok(target) => {
                SlackResponse::ephemeral(format!("Your next target: {}.", mention(&target.id)))
            }
            Err(err) => SlackResponse::ephemeral(err.to_string()),
        }
    };

    respond(&cmd, started, response)
}

/// POST /endpoint/ffhit
async fn report_hit(form: web::Form<SlashCommand>, app_state: web::Data<AppState>) -> HttpResponse {
    let started = Instant::now();
    let cmd = form.into_inner();
    let game = app_state.registry.load_or_create(&cmd.channel_id);

    let response = match game.write().report_hit(&cmd.user_id, OffsetDateTime::now_utc()) {
        Ok(victim) => SlackResponse::in_channel(format!("{} has been hit!", mention(&victim.id))),
        Err(err) => SlackResponse::ephemeral(err.to_string()),
    };

    respond(&cmd, started, response)
}

/// POST /endpoint/ffdispute
async fn dispute_hit(
    form: web::Form<SlashCommand>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let started = Instant::now();
    let cmd = form.into_inner();
    let game = app_state.registry.load_or_create(&cmd.channel_id);

    let response = match game.write().dispute_hit(&cmd.user_id, OffsetDateTime::now_utc()) {
        Ok(rolled_back) => {
            if let Some(eliminator) = rolled_back {
                debug!(
                    channel_id = %cmd.channel_id,
                    user_id = %cmd.user_id,
                    eliminator = %eliminator,
                    "dispute rolled back a score"
                );
            }
            SlackResponse::in_channel(format!("Revived: {}.", mention(&cmd.user_id)))
        }
        Err(err) => SlackResponse::ephemeral(err.to_string()),
    };

    respond(&cmd, started, response)
}

/// POST /endpoint/ffscore
async fn scoreboard(form: web::Form<SlashCommand>, app_state: web::Data<AppState>) -> HttpResponse {
    let started = Instant::now();
    let cmd = form.into_inner();
    let game = app_state.registry.load_or_create(&cmd.channel_id);

    let entries = game.read().scoreboard();
    let response = SlackResponse::ephemeral(live_scoreboard(&entries));

    respond(&cmd, started, response)
}

/// POST /endpoint/ffreset
///
/// Administrative override: wipes the channel's game back to idle. Never
/// fails, so the announcement is unconditional.
async fn reset(form: web::Form<SlashCommand>, app_state: web::Data<AppState>) -> HttpResponse {
    let started = Instant::now();
    let cmd = form.into_inner();
    let game = app_state.registry.load_or_create(&cmd.channel_id);

    game.write().reset();
    let response = SlackResponse::in_channel("FireFight reset.");

    respond(&cmd, started, response)
}

fn respond(cmd: &SlashCommand, started: Instant, response: SlackResponse) -> HttpResponse {
    info!(
        channel_id = %cmd.channel_id,
        command = %cmd.command,
        user_id = %cmd.user_id,
        elapsed = ?started.elapsed(),
        "request completed"
    );

    HttpResponse::Ok().json(response)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/endpoint")
            .route("/ffstart", web::post().to(start))
            .route("/ffpause", web::post().to(pause))
            .route("/ffend", web::post().to(end))
            .route("/ffjoin", web::post().to(join))
            .route("/fftarget", web::post().to(target))
            .route("/ffhit", web::post().to(report_hit))
            .route("/ffdispute", web::post().to(dispute_hit))
            .route("/ffscore", web::post().to(scoreboard))
            .route("/ffreset", web::post().to(reset)),
    );
}
