// src/server/mod.rs

//! Server layer root module.
//!
//! This module hosts the game behind HTTP and WebSockets, including:
//! - Application state management
//! - HTTP/WebSocket routing and plain HTTP endpoints
//! - Game session orchestration (countdown, client actions, broadcasts)
//! - Per-connection flood protection and error frames

pub mod state;
pub mod router;
pub mod api;
pub mod game_session;
pub mod anti_spam;
pub mod ws_actor_utils;
pub mod ws_error;
