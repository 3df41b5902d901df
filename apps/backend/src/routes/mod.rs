use actix_web::web;

pub mod commands;
pub mod debug;
pub mod health;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(commands::configure_routes)
        .configure(debug::configure_routes)
        .configure(health::configure_routes);
}
