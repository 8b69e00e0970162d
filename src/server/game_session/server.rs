use actix::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use actix::MessageResult;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;
use log::{debug, info, warn};

use crate::assets::AssetProvider;
use crate::config::game::{SESSION_IDLE_TIMEOUT_SECS, TICK_INTERVAL_MS};
use crate::game::pool::ImagePool;
use crate::game::state::GameState;
use crate::game::systems::cues::cues_for;
use crate::game::systems::round::{advance, reset_session, start_session, submit_guess, tick};
use crate::server::game_session::countdown::Countdown;
use crate::server::game_session::messages::{
    ClientAction, GameStateUpdate, GameView, ProcessClientMessage, ResolvedCue,
};

/// Clock settings shared by every session a manager opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    /// Interval between two countdown ticks.
    pub tick_interval: Duration,
    /// How long a session waits for its first client before closing.
    pub idle_timeout: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            idle_timeout: Duration::from_secs(SESSION_IDLE_TIMEOUT_SECS),
        }
    }
}

/// One player's guessing session.
///
/// The actor mailbox serializes countdown ticks and client actions, so the
/// state is only ever touched by one event at a time.
pub struct GameSession {
    pub game_id: Uuid,
    state: GameState,
    pool: Arc<ImagePool>,
    assets: Arc<dyn AssetProvider>,
    rng: StdRng,
    pub(crate) countdown: Countdown,
    clients: HashMap<Uuid, Recipient<GameStateUpdate>>,
    idle_timeout: Duration,
    manager: Option<Addr<GameSessionManager>>,
}

impl GameSession {
    pub fn new(
        game_id: Uuid,
        pool: Arc<ImagePool>,
        assets: Arc<dyn AssetProvider>,
        timing: SessionTiming,
        manager: Option<Addr<GameSessionManager>>,
    ) -> Self {
        Self {
            game_id,
            state: GameState::new(),
            pool,
            assets,
            rng: StdRng::from_os_rng(),
            countdown: Countdown::new(timing.tick_interval),
            clients: HashMap::new(),
            idle_timeout: timing.idle_timeout,
            manager,
        }
    }

    /// Replace the random source, for reproducible sessions.
    #[cfg(test)]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    fn view(&self) -> GameView {
        GameView::build(&self.state, self.assets.as_ref())
    }

    /// Run one transition, keep the countdown in step and publish the result.
    fn apply<F>(&mut self, ctx: &mut Context<Self>, transition: F)
    where
        F: FnOnce(GameState, &ImagePool, &mut StdRng) -> GameState,
    {
        let next = transition(self.state.clone(), self.pool.as_ref(), &mut self.rng);
        let prev = std::mem::replace(&mut self.state, next);

        self.countdown.sync(&self.state, ctx);

        if prev == self.state {
            return;
        }

        if self.state.is_over() && !prev.is_over() {
            info!(
                "[GameSession] Game over: game_id={} score={} reason={:?}",
                self.game_id, self.state.score, self.state.end_reason
            );
        }

        let cues = cues_for(&prev, &self.state)
            .into_iter()
            .map(|cue| ResolvedCue::resolve(cue, self.assets.as_ref()))
            .collect();
        self.broadcast(cues);
    }

    fn broadcast(&self, cues: Vec<ResolvedCue>) {
        debug!(
            "[GameSession] Broadcast state: game_id={} phase={:?} time_left={} score={}",
            self.game_id, self.state.phase, self.state.time_left, self.state.score
        );
        let update = GameStateUpdate {
            game_id: self.game_id,
            view: self.view(),
            cues,
        };
        for addr in self.clients.values() {
            addr.do_send(update.clone());
        }
    }

    /// Countdown callback. Ticks armed for an earlier round are dropped.
    pub(crate) fn handle_tick(&mut self, round: u32, ctx: &mut Context<Self>) {
        if round != self.state.round {
            debug!(
                "[GameSession] Stale tick for round {} (current {}) ignored",
                round, self.state.round
            );
            self.countdown.sync(&self.state, ctx);
            return;
        }
        self.apply(ctx, |state, _, _| tick(state));
    }
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[GameSession] Created game_id={} pool_size={}", self.game_id, self.pool.len());
        ctx.run_later(self.idle_timeout, |act, ctx| {
            if act.clients.is_empty() {
                info!("[GameSession] No client joined game_id={}, closing", act.game_id);
                ctx.stop();
            }
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(manager) = &self.manager {
            manager.do_send(SessionClosed { game_id: self.game_id });
        }
    }
}

impl Handler<ProcessClientMessage> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: ProcessClientMessage, ctx: &mut Context<Self>) -> Self::Result {
        if !self.clients.contains_key(&msg.client_id) {
            warn!("[GameSession] Action from unknown client {} ignored", msg.client_id);
            return;
        }

        match msg.msg {
            ClientAction::Start => self.apply(ctx, |state, pool, rng| start_session(state, pool, rng)),
            ClientAction::Guess(label) => self.apply(ctx, move |state, _, _| submit_guess(state, &label)),
            ClientAction::Next => self.apply(ctx, |state, pool, rng| advance(state, pool, rng)),
            ClientAction::Reset => {
                // The fresh round may carry the same round number and clock as
                // the one it replaces, so the pending tick must not survive it.
                self.countdown.cancel(ctx);
                self.apply(ctx, |state, pool, rng| reset_session(state, pool, rng))
            }
            ClientAction::Ping => {}
        }
    }
}

/// Drive the countdown by hand.
#[cfg(test)]
#[derive(Message)]
#[rtype(result = "()")]
pub struct Tick {
    pub round: u32,
}

#[cfg(test)]
impl Handler<Tick> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Tick, ctx: &mut Context<Self>) -> Self::Result {
        self.handle_tick(msg.round, ctx);
    }
}

#[cfg(test)]
#[derive(Message)]
#[rtype(result = "GameState")]
pub struct GetSnapshot;

#[cfg(test)]
impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.state.clone())
    }
}

#[cfg(test)]
#[derive(Message)]
#[rtype(result = "bool")]
pub struct IsCountdownArmed;

#[cfg(test)]
impl Handler<IsCountdownArmed> for GameSession {
    type Result = bool;

    fn handle(&mut self, _: IsCountdownArmed, _: &mut Context<Self>) -> Self::Result {
        self.countdown.is_armed()
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct RegisterSession {
    pub client_id: Uuid,
    pub addr: Recipient<GameStateUpdate>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct UnregisterSession {
    pub client_id: Uuid,
}

impl Handler<RegisterSession> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: RegisterSession, _: &mut Context<Self>) -> Self::Result {
        debug!("[GameSession] Client {} joined game_id={}", msg.client_id, self.game_id);
        msg.addr.do_send(GameStateUpdate {
            game_id: self.game_id,
            view: self.view(),
            cues: Vec::new(),
        });
        self.clients.insert(msg.client_id, msg.addr);
    }
}

impl Handler<UnregisterSession> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: UnregisterSession, ctx: &mut Context<Self>) -> Self::Result {
        self.clients.remove(&msg.client_id);
        if self.clients.is_empty() {
            info!("[GameSession] Last client left game_id={}, closing", self.game_id);
            self.countdown.cancel(ctx);
            ctx.stop();
        }
    }
}

/// Owns every live session, keyed by game id.
pub struct GameSessionManager {
    sessions: HashMap<Uuid, Addr<GameSession>>,
    pool: Arc<ImagePool>,
    assets: Arc<dyn AssetProvider>,
    timing: SessionTiming,
}

impl GameSessionManager {
    pub fn new(assets: Arc<dyn AssetProvider>, timing: SessionTiming) -> Self {
        let pool = Arc::new(ImagePool::from_provider(assets.as_ref()));
        if pool.is_empty() {
            warn!("[SessionManager] Image pool is empty, every game will end immediately");
        }
        Self {
            sessions: HashMap::new(),
            pool,
            assets,
            timing,
        }
    }

    pub fn create_game(&mut self, manager: Addr<GameSessionManager>) -> Uuid {
        let game_id = Uuid::new_v4();
        let session = GameSession::new(
            game_id,
            self.pool.clone(),
            self.assets.clone(),
            self.timing,
            Some(manager),
        )
        .start();

        self.sessions.insert(game_id, session);
        info!("[SessionManager] Game {} created ({} live)", game_id, self.sessions.len());
        game_id
    }
}

impl Actor for GameSessionManager {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "Uuid")]
pub struct CreateGame;

impl Handler<CreateGame> for GameSessionManager {
    type Result = MessageResult<CreateGame>;

    fn handle(&mut self, _: CreateGame, ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.create_game(ctx.address()))
    }
}

#[derive(Message)]
#[rtype(result = "Result<Addr<GameSession>, String>")]
pub struct GetGameSession {
    pub game_id: Uuid,
}

impl Handler<GetGameSession> for GameSessionManager {
    type Result = Result<Addr<GameSession>, String>;

    fn handle(&mut self, msg: GetGameSession, _: &mut Context<Self>) -> Self::Result {
        self.sessions.get(&msg.game_id)
            .cloned()
            .ok_or_else(|| "Game session not found".to_string())
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct SessionClosed {
    pub game_id: Uuid,
}

impl Handler<SessionClosed> for GameSessionManager {
    type Result = ();

    fn handle(&mut self, msg: SessionClosed, _: &mut Context<Self>) -> Self::Result {
        if self.sessions.remove(&msg.game_id).is_some() {
            info!("[SessionManager] Game {} closed ({} live)", msg.game_id, self.sessions.len());
        }
    }
}
