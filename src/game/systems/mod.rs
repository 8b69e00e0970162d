pub mod round;
pub mod cues;
