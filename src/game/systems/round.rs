//! Round controller transitions.
//!
//! Every function takes the current `GameState` by value and returns the
//! next one. Calls made outside their valid phase return the state
//! unchanged, so stale or duplicated triggers are harmless.

use rand::Rng;
use rand::seq::IteratorRandom;
use log::debug;

use crate::config::game::ROUND_DURATION_SECS;
use crate::game::pool::ImagePool;
use crate::game::state::GameState;
use crate::game::types::{Category, EndReason, Phase, RoundOutcome};

/// Begin the first session. Only valid before anything has been played.
pub fn start_session<R: Rng + ?Sized>(state: GameState, pool: &ImagePool, rng: &mut R) -> GameState {
    if state.phase != Phase::NotStarted {
        return state;
    }
    begin(pool, rng)
}

/// Throw the current session away and deal a fresh one. Valid in any phase.
pub fn reset_session<R: Rng + ?Sized>(_state: GameState, pool: &ImagePool, rng: &mut R) -> GameState {
    begin(pool, rng)
}

fn begin<R: Rng + ?Sized>(pool: &ImagePool, rng: &mut R) -> GameState {
    let state = GameState {
        phase: Phase::Playing,
        ..GameState::new()
    };
    select_next_round(state, pool, rng)
}

/// Deal an unseen image, or end the session when the pool is exhausted.
pub fn select_next_round<R: Rng + ?Sized>(mut state: GameState, pool: &ImagePool, rng: &mut R) -> GameState {
    match state.phase {
        Phase::Playing | Phase::RoundResolved(RoundOutcome::Correct) => {}
        _ => return state,
    }

    let picked = pool
        .entries()
        .iter()
        .filter(|entry| !state.has_used(entry))
        .choose(rng)
        .cloned();

    let Some(entry) = picked else {
        debug!("[Round] Pool exhausted after {} rounds", state.round);
        state.current_image = None;
        state.phase = Phase::GameOver;
        state.end_reason = Some(EndReason::PoolExhausted);
        return state;
    };

    state.used_images.insert(entry.clone());
    state.current_image = Some(entry);
    state.time_left = ROUND_DURATION_SECS;
    state.round += 1;
    state.last_outcome = None;
    state.phase = Phase::AwaitingGuess;
    state
}

/// One second elapsed.
pub fn tick(mut state: GameState) -> GameState {
    if !state.is_awaiting_guess() || state.time_left == 0 {
        return state;
    }
    state.time_left -= 1;
    if state.time_left == 0 {
        state = resolve(state, RoundOutcome::Incorrect);
        state = finish(state, EndReason::Timeout);
    }
    state
}

/// Evaluate a guess label. Labels that name no category count as wrong.
pub fn submit_guess(mut state: GameState, label: &str) -> GameState {
    if !state.is_awaiting_guess() {
        return state;
    }
    let answer = state.current_image.as_ref().map(|image| image.category);
    let correct = answer.is_some() && Category::from_label(label) == answer;

    if correct {
        state.score += 1;
        resolve(state, RoundOutcome::Correct)
    } else {
        state = resolve(state, RoundOutcome::Incorrect);
        finish(state, EndReason::WrongGuess)
    }
}

/// Move on after a correct guess.
pub fn advance<R: Rng + ?Sized>(state: GameState, pool: &ImagePool, rng: &mut R) -> GameState {
    if state.phase != Phase::RoundResolved(RoundOutcome::Correct) {
        return state;
    }
    select_next_round(state, pool, rng)
}

fn resolve(mut state: GameState, outcome: RoundOutcome) -> GameState {
    state.phase = Phase::RoundResolved(outcome);
    state.last_outcome = Some(outcome);
    state
}

fn finish(mut state: GameState, reason: EndReason) -> GameState {
    state.phase = Phase::GameOver;
    state.end_reason = Some(reason);
    state
}
