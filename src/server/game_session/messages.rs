use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::assets::AssetProvider;
use crate::game::state::GameState;
use crate::game::systems::cues::{CueKind, SoundCue, SoundEffect};
use crate::game::types::{Category, EndReason, Phase, RoundOutcome};

/// Client -> server commands, one per button of the game screen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum ClientAction {
    Start,
    /// Guess label; anything that is not a known label is a wrong answer.
    Guess(String),
    Next,
    Reset,
    Ping,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct ProcessClientMessage {
    pub msg: ClientAction,
    pub client_id: Uuid,
}

/// One guess button.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GuessChoice {
    pub label: String,
    pub name: String,
}

/// Which controls the screen should show in the current phase.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Controls {
    pub play: bool,
    pub guess: bool,
    pub next: bool,
    pub play_again: bool,
}

impl Controls {
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::NotStarted => Controls { play: true, ..Default::default() },
            Phase::AwaitingGuess => Controls { guess: true, ..Default::default() },
            Phase::RoundResolved(RoundOutcome::Correct) => Controls { next: true, ..Default::default() },
            Phase::GameOver => Controls { play_again: true, ..Default::default() },
            Phase::Playing | Phase::RoundResolved(RoundOutcome::Incorrect) => Controls::default(),
        }
    }
}

/// Everything the browser needs to render the screen.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameView {
    pub score: u32,
    pub time_left: u8,
    pub phase: Phase,
    pub image: Option<String>,
    pub last_outcome: Option<RoundOutcome>,
    pub end_reason: Option<EndReason>,
    pub choices: Vec<GuessChoice>,
    pub controls: Controls,
}

impl GameView {
    pub fn build(state: &GameState, assets: &dyn AssetProvider) -> Self {
        GameView {
            score: state.score,
            time_left: state.time_left,
            phase: state.phase,
            image: state.current_image.as_ref().map(|image| image.path.clone()),
            last_outcome: state.last_outcome,
            end_reason: state.end_reason,
            choices: Category::ALL
                .into_iter()
                .map(|category| GuessChoice {
                    label: category.label().to_string(),
                    name: assets.display_name(category),
                })
                .collect(),
            controls: Controls::for_phase(state.phase),
        }
    }
}

/// A sound cue with its asset reference resolved.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResolvedCue {
    pub kind: CueKind,
    pub delay_ms: u64,
    pub src: Option<String>,
}

impl ResolvedCue {
    pub fn resolve(cue: SoundCue, assets: &dyn AssetProvider) -> Self {
        let effect = match cue.kind {
            CueKind::StartBackground | CueKind::StopBackground => SoundEffect::BackgroundLoop,
            CueKind::Play(effect) => effect,
        };
        ResolvedCue {
            kind: cue.kind,
            delay_ms: cue.delay_ms,
            src: assets.sound(effect),
        }
    }
}

#[derive(Message, Clone, Serialize, Deserialize, Debug)]
#[rtype(result = "()")]
pub struct GameStateUpdate {
    pub game_id: Uuid,
    pub view: GameView,
    pub cues: Vec<ResolvedCue>,
}
