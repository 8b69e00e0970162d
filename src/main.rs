//! Main entry point for the photo guessing game backend.
//!
//! Loads the asset catalog, starts the session manager actor, and launches
//! the HTTP server with the game's REST and WebSocket endpoints.

use std::sync::Arc;
use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use assets::{AssetProvider, StaticCatalog};
use server::game_session::server::{GameSessionManager, SessionTiming};

pub mod config;
mod assets;
mod game;
mod server;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let catalog = StaticCatalog::default();
    if let Err(e) = catalog.validate() {
        error!("[Main] Invalid asset catalog: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
    }
    let assets: Arc<dyn AssetProvider> = Arc::new(catalog);

    // Start the GameSessionManager actor (owns every running game).
    let game_session_manager = GameSessionManager::new(assets.clone(), SessionTiming::default()).start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(game_session_manager, assets));

    let (host, port) = config::server::bind_address();
    info!("[Main] Listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
