//! HTTP and WebSocket routing configuration.
//!
//! Game creation and the catalog are plain HTTP; each running game is
//! reached over its own WebSocket.

use actix_web::web;
use crate::server::api::{catalog, create_game};
use crate::server::game_session::session::ws_game;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/games")
            .route(web::post().to(create_game))
    )
    .service(
        web::resource("/api/catalog")
            .route(web::get().to(catalog))
    )
    .service(
        web::resource("/ws/game/{game_id}")
            .to(ws_game)
    );
}
