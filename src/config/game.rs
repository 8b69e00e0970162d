//! Game configuration constants.
//!
//! This module defines the main gameplay parameters such as the round
//! countdown and the pacing of the timer and sound cues.

pub const ROUND_DURATION_SECS: u8 = 10; // Seconds a player has to guess each image.

/// Interval (in milliseconds) between two countdown ticks.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Delay (in milliseconds) before the "incorrect" effect plays after a loss.
pub const INCORRECT_SOUND_DELAY_MS: u64 = 100;

/// Time (in seconds) a session may sit without any connected client before it is dropped.
pub const SESSION_IDLE_TIMEOUT_SECS: u64 = 60;
