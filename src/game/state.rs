use std::collections::HashSet;
use serde::{Serialize, Deserialize};

use crate::config::game::ROUND_DURATION_SECS;
use crate::game::types::{EndReason, ImageEntry, Phase, RoundOutcome};

/// Complete state of one guessing session.
///
/// Only the transition functions in `game::systems::round` produce new
/// values; the owning session holds the single mutable binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub current_image: Option<ImageEntry>,
    pub time_left: u8,
    pub phase: Phase,
    pub used_images: HashSet<ImageEntry>,
    /// Rounds dealt in this session. Timer callbacks carry it so a late
    /// tick from a finished round is recognised and dropped.
    pub round: u32,
    pub last_outcome: Option<RoundOutcome>,
    pub end_reason: Option<EndReason>,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            score: 0,
            current_image: None,
            time_left: ROUND_DURATION_SECS,
            phase: Phase::NotStarted,
            used_images: HashSet::new(),
            round: 0,
            last_outcome: None,
            end_reason: None,
        }
    }

    pub fn is_awaiting_guess(&self) -> bool {
        self.phase == Phase::AwaitingGuess
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn has_used(&self, entry: &ImageEntry) -> bool {
        self.used_images.contains(entry)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
