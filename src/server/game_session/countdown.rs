//! Per-round countdown timer for a GameSession.
//!
//! The timer is a single `run_later` callback re-armed after each tick. It
//! exists only while the state is awaiting a guess and is tagged with the
//! round and clock reading it was armed for.

use std::time::Duration;
use actix::prelude::*;
use log::debug;

use crate::game::state::GameState;
use crate::server::game_session::server::GameSession;

/// What `Countdown::sync` has to do to match the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPlan {
    Keep,
    Arm(TimerKey),
    Cancel,
    Rearm(TimerKey),
}

/// Round number and seconds left when a tick was armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerKey {
    pub round: u32,
    pub time_left: u8,
}

pub struct Countdown {
    interval: Duration,
    handle: Option<SpawnHandle>,
    armed: Option<TimerKey>,
}

impl Countdown {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            handle: None,
            armed: None,
        }
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn plan(&self, state: &GameState) -> TimerPlan {
        plan_for(self.armed, state)
    }

    /// Arm, cancel or replace the pending tick so it matches `state`.
    pub fn sync(&mut self, state: &GameState, ctx: &mut Context<GameSession>) {
        match self.plan(state) {
            TimerPlan::Keep => {}
            TimerPlan::Arm(key) => self.arm(key, ctx),
            TimerPlan::Cancel => self.cancel(ctx),
            TimerPlan::Rearm(key) => {
                self.cancel(ctx);
                self.arm(key, ctx);
            }
        }
    }

    /// Forget the handle of a callback that has just run.
    pub fn fired(&mut self) {
        self.handle = None;
        self.armed = None;
    }

    pub fn cancel(&mut self, ctx: &mut Context<GameSession>) {
        if let Some(handle) = self.handle.take() {
            ctx.cancel_future(handle);
            debug!("[Countdown] Disarmed: {:?}", self.armed);
        }
        self.armed = None;
    }

    fn arm(&mut self, key: TimerKey, ctx: &mut Context<GameSession>) {
        let handle = ctx.run_later(self.interval, move |act, ctx| {
            act.countdown.fired();
            act.handle_tick(key.round, ctx);
        });
        self.handle = Some(handle);
        self.armed = Some(key);
    }
}

fn plan_for(armed: Option<TimerKey>, state: &GameState) -> TimerPlan {
    let wanted = state.is_awaiting_guess().then_some(TimerKey {
        round: state.round,
        time_left: state.time_left,
    });
    match (armed, wanted) {
        (None, None) => TimerPlan::Keep,
        (None, Some(key)) => TimerPlan::Arm(key),
        (Some(_), None) => TimerPlan::Cancel,
        (Some(current), Some(key)) if current == key => TimerPlan::Keep,
        (Some(_), Some(key)) => TimerPlan::Rearm(key),
    }
}
