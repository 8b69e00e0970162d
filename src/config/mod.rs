/// Main configuration module.
/// 
/// Re-exports submodules for game, server, catalog and anti-spam configuration.
pub mod game;
pub mod server;
pub mod catalog;
pub mod anti_spam;
