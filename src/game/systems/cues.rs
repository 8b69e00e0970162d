//! Sound cues emitted when the phase changes.

use serde::{Serialize, Deserialize};

use crate::config::game::INCORRECT_SOUND_DELAY_MS;
use crate::game::state::GameState;
use crate::game::types::{EndReason, Phase, RoundOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    BackgroundLoop,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CueKind {
    StartBackground,
    StopBackground,
    Play(SoundEffect),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundCue {
    pub kind: CueKind,
    pub delay_ms: u64,
}

impl SoundCue {
    fn now(kind: CueKind) -> Self {
        Self { kind, delay_ms: 0 }
    }
}

/// Cues for the transition `prev -> next`. Identical states produce none.
pub fn cues_for(prev: &GameState, next: &GameState) -> Vec<SoundCue> {
    if prev.phase == next.phase && prev.round == next.round {
        return Vec::new();
    }

    match next.phase {
        Phase::AwaitingGuess if next.round == 1 => vec![SoundCue::now(CueKind::StartBackground)],
        Phase::RoundResolved(RoundOutcome::Correct) => {
            vec![SoundCue::now(CueKind::Play(SoundEffect::Correct))]
        }
        Phase::GameOver if prev.phase != Phase::GameOver => {
            let mut cues = vec![SoundCue::now(CueKind::StopBackground)];
            if next.end_reason != Some(EndReason::PoolExhausted) {
                cues.push(SoundCue {
                    kind: CueKind::Play(SoundEffect::Incorrect),
                    delay_ms: INCORRECT_SOUND_DELAY_MS,
                });
            }
            cues
        }
        _ => Vec::new(),
    }
}
