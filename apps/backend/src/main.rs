use actix_web::{web, App, HttpServer};
use backend::config::game::GameConfig;
use backend::config::server::ServerConfig;
use backend::routes;
use backend::state::app_state::AppState;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from WEREWOLF_* environment variables; every
    // setting has a default.
    let server = ServerConfig::from_env().unwrap_or_else(|e| {
        eprintln!("❌ {e}");
        std::process::exit(1);
    });
    let game = GameConfig::from_env().unwrap_or_else(|e| {
        eprintln!("❌ {e}");
        std::process::exit(1);
    });

    println!(
        "🐺 Starting Werewolf on http://{}:{}",
        server.host, server.port
    );
    info!(
        host = %server.host,
        port = server.port,
        min_players = game.min_players,
        "Werewolf backend starting"
    );

    // One room for the whole process; built before the server so every
    // worker shares it.
    let data = web::Data::new(AppState::new(game));

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
