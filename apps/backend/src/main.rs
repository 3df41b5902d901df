use actix_web::{web, App, HttpServer};
use backend::config::ServerConfig;
use backend::routes;
use backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting FireFight backend on http://{}:{}",
        config.host, config.port
    );

    // One registry of per-channel games, shared across workers.
    let data = web::Data::new(AppState::new());

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
            .route("/", web::get().to(routes::health::root))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
