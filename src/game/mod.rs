//! Game domain: image pool, session state and the round controller.
//!
//! Nothing here knows about actors, timers or sockets; the server layer
//! feeds events in and broadcasts whatever state comes out.

pub mod types;
pub mod pool;
pub mod state;
pub mod systems;
