// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the session manager address and the asset provider shared by all
//! HTTP/WebSocket handlers.

use std::sync::Arc;
use actix::Addr;

use crate::assets::AssetProvider;
use crate::server::game_session::server::GameSessionManager;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the game session manager actor (creates and looks up sessions).
    pub game_session_manager: Addr<GameSessionManager>,
    /// Image and sound catalog.
    pub assets: Arc<dyn AssetProvider>,
}

impl AppState {
    /// Create a new AppState with the given manager address and catalog.
    pub fn new(
        game_session_manager: Addr<GameSessionManager>,
        assets: Arc<dyn AssetProvider>,
    ) -> Self {
        AppState {
            game_session_manager,
            assets,
        }
    }
}
