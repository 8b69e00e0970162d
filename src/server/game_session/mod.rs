pub mod server;
pub mod session;
pub mod messages;
pub mod countdown;
