#[cfg(test)]
mod scenarios {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::game::ROUND_DURATION_SECS;
    use crate::game::pool::ImagePool;
    use crate::game::state::GameState;
    use crate::game::systems::round::*;
    use crate::game::types::{Category, EndReason, ImageEntry, Phase, RoundOutcome};

    fn other(label: &str) -> &'static str {
        match Category::from_label(label) {
            Some(Category::PersonA) => Category::PersonB.label(),
            _ => Category::PersonA.label(),
        }
    }

    fn current_label(state: &GameState) -> &'static str {
        state.current_image.as_ref().expect("image dealt").category.label()
    }

    #[test]
    fn test_two_image_session() {
        let a1 = ImageEntry::new("A1", Category::PersonA);
        let b1 = ImageEntry::new("B1", Category::PersonB);
        let pool = ImagePool::new(vec![a1.clone(), b1.clone()]);
        let mut first_picks = Vec::new();

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let state = start_session(GameState::new(), &pool, &mut rng);
            let first = state.current_image.clone().unwrap();
            first_picks.push(first.clone());

            let label = current_label(&state);
            let state = submit_guess(state, label);
            assert_eq!(state.score, 1);
            assert_eq!(state.phase, Phase::RoundResolved(RoundOutcome::Correct));

            let state = advance(state, &pool, &mut rng);
            let second = state.current_image.clone().unwrap();
            assert_ne!(first, second);
            assert!(second == a1 || second == b1);

            let wrong = other(current_label(&state));
            let state = submit_guess(state, wrong);
            assert_eq!(state.phase, Phase::GameOver);
            assert_eq!(state.score, 1);
        }

        // Both images turn up as the opening pick across seeds.
        assert!(first_picks.contains(&a1));
        assert!(first_picks.contains(&b1));
    }

    #[test]
    fn test_single_image_pool_exhausts() {
        let pool = ImagePool::new(vec![ImageEntry::new("A1", Category::PersonA)]);
        let mut rng = StdRng::seed_from_u64(0);

        let state = start_session(GameState::new(), &pool, &mut rng);
        let state = submit_guess(state, "personA");
        let state = advance(state, &pool, &mut rng);

        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.end_reason, Some(EndReason::PoolExhausted));
        assert_eq!(state.score, 1);
        assert_eq!(state.used_images.len(), 1);

        // Nothing moves once the deck is spent.
        assert_eq!(select_next_round(state.clone(), &pool, &mut rng), state);
        assert_eq!(advance(state.clone(), &pool, &mut rng), state);
    }

    #[test]
    fn test_perfect_run_uses_every_image_once() {
        let pool = ImagePool::from_provider(&crate::assets::StaticCatalog::default());
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = start_session(GameState::new(), &pool, &mut rng);
        let mut rounds = 0;

        while !state.is_over() {
            let label = current_label(&state);
            state = submit_guess(state, label);
            state = advance(state, &pool, &mut rng);
            rounds += 1;
            assert!(state.used_images.len() <= pool.len());
        }

        assert_eq!(rounds, pool.len());
        assert_eq!(state.score as usize, pool.len());
        assert_eq!(state.used_images.len(), pool.len());
        assert_eq!(state.end_reason, Some(EndReason::PoolExhausted));
    }

    /// Random mix of events, checking the invariants after each one.
    #[test]
    fn test_invariants_under_random_events() {
        use rand::Rng;

        let pool = ImagePool::new(
            (0..8)
                .map(|i| {
                    let category = if i < 4 { Category::PersonA } else { Category::PersonB };
                    ImageEntry::new(format!("/p/{}.jpg", i), category)
                })
                .collect(),
        );

        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = GameState::new();
            let mut dealt: Vec<ImageEntry> = Vec::new();

            for _ in 0..200 {
                let prev = state.clone();
                let mut reset = false;
                state = match rng.random_range(0..6) {
                    0 => start_session(state, &pool, &mut rng),
                    1 => tick(state),
                    2 => {
                        let label = state
                            .current_image
                            .as_ref()
                            .map(|image| image.category.label())
                            .unwrap_or("personA");
                        submit_guess(state, label)
                    }
                    3 => submit_guess(state, "nobody"),
                    4 => advance(state, &pool, &mut rng),
                    _ if rng.random_bool(0.1) => {
                        reset = true;
                        reset_session(state, &pool, &mut rng)
                    }
                    _ => tick(state),
                };

                if reset {
                    dealt.clear();
                    dealt.extend(state.current_image.clone());
                } else if state.round > prev.round {
                    let image = state.current_image.clone().unwrap();
                    assert!(!dealt.contains(&image), "image dealt twice in one session");
                    dealt.push(image);
                }

                assert!(state.used_images.len() <= pool.len());
                assert_eq!(state.used_images.len(), state.round as usize);
                assert!(state.time_left <= ROUND_DURATION_SECS);
                if state.score > prev.score {
                    assert_eq!(state.score, prev.score + 1);
                    assert_eq!(state.phase, Phase::RoundResolved(RoundOutcome::Correct));
                }
                if prev.is_over() && !reset {
                    // Only a reset leaves GameOver.
                    assert_eq!(state, prev);
                }
            }
        }
    }
}

#[cfg(test)]
mod actors {
    use std::sync::Arc;
    use std::time::Duration;
    use actix::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use uuid::Uuid;

    use crate::assets::{AssetProvider, StaticCatalog};
    use crate::game::pool::ImagePool;
    use crate::game::state::GameState;
    use crate::game::systems::cues::CueKind;
    use crate::game::types::{EndReason, Phase, RoundOutcome};
    use crate::server::game_session::messages::{ClientAction, GameStateUpdate, ProcessClientMessage};
    use crate::server::game_session::server::*;

    /// Records every update a session pushes.
    #[derive(Default)]
    struct Collector {
        updates: Vec<GameStateUpdate>,
    }

    impl Actor for Collector {
        type Context = Context<Self>;
    }

    impl Handler<GameStateUpdate> for Collector {
        type Result = ();

        fn handle(&mut self, msg: GameStateUpdate, _: &mut Context<Self>) {
            self.updates.push(msg);
        }
    }

    #[derive(Message)]
    #[rtype(result = "Vec<GameStateUpdate>")]
    struct Drain;

    impl Handler<Drain> for Collector {
        type Result = MessageResult<Drain>;

        fn handle(&mut self, _: Drain, _: &mut Context<Self>) -> Self::Result {
            MessageResult(std::mem::take(&mut self.updates))
        }
    }

    fn timing(tick_interval: Duration, idle_timeout: Duration) -> SessionTiming {
        SessionTiming { tick_interval, idle_timeout }
    }

    fn start_session(tick_interval: Duration) -> Addr<GameSession> {
        let assets: Arc<dyn AssetProvider> = Arc::new(StaticCatalog::default());
        let pool = Arc::new(ImagePool::from_provider(assets.as_ref()));
        let timing = timing(tick_interval, Duration::from_secs(3600));
        GameSession::new(Uuid::new_v4(), pool, assets, timing, None)
            .with_rng(StdRng::seed_from_u64(3))
            .start()
    }

    async fn join(session: &Addr<GameSession>) -> (Uuid, Addr<Collector>) {
        let client_id = Uuid::new_v4();
        let collector = Collector::default().start();
        session
            .send(RegisterSession { client_id, addr: collector.clone().recipient() })
            .await
            .unwrap();
        (client_id, collector)
    }

    async fn act(session: &Addr<GameSession>, client_id: Uuid, msg: ClientAction) -> GameState {
        session.send(ProcessClientMessage { msg, client_id }).await.unwrap();
        session.send(GetSnapshot).await.unwrap()
    }

    #[actix::test]
    async fn test_register_pushes_current_state() {
        let session = start_session(Duration::from_secs(3600));
        let (_, collector) = join(&session).await;

        let updates = collector.send(Drain).await.unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].view.phase, Phase::NotStarted);
        assert!(updates[0].view.controls.play);
        assert!(updates[0].cues.is_empty());
    }

    #[actix::test]
    async fn test_countdown_armed_only_while_awaiting_guess() {
        let session = start_session(Duration::from_secs(3600));
        let (client_id, _collector) = join(&session).await;

        assert!(!session.send(IsCountdownArmed).await.unwrap());

        let state = act(&session, client_id, ClientAction::Start).await;
        assert_eq!(state.phase, Phase::AwaitingGuess);
        assert!(session.send(IsCountdownArmed).await.unwrap());

        let label = state.current_image.as_ref().unwrap().category.label().to_string();
        let state = act(&session, client_id, ClientAction::Guess(label)).await;
        assert_eq!(state.phase, Phase::RoundResolved(RoundOutcome::Correct));
        assert!(!session.send(IsCountdownArmed).await.unwrap());

        // A late tick for the resolved round changes nothing.
        session.send(Tick { round: state.round }).await.unwrap();
        assert_eq!(session.send(GetSnapshot).await.unwrap(), state);
        assert!(!session.send(IsCountdownArmed).await.unwrap());

        let state = act(&session, client_id, ClientAction::Next).await;
        assert_eq!(state.phase, Phase::AwaitingGuess);
        assert_eq!(state.round, 2);
        assert!(session.send(IsCountdownArmed).await.unwrap());
    }

    #[actix::test]
    async fn test_stale_tick_from_previous_round_is_dropped() {
        let session = start_session(Duration::from_secs(3600));
        let (client_id, _collector) = join(&session).await;

        let state = act(&session, client_id, ClientAction::Start).await;
        let label = state.current_image.as_ref().unwrap().category.label().to_string();
        act(&session, client_id, ClientAction::Guess(label)).await;
        let state = act(&session, client_id, ClientAction::Next).await;

        session.send(Tick { round: 1 }).await.unwrap();
        let after = session.send(GetSnapshot).await.unwrap();
        assert_eq!(after.time_left, state.time_left);

        session.send(Tick { round: 2 }).await.unwrap();
        let after = session.send(GetSnapshot).await.unwrap();
        assert_eq!(after.time_left, state.time_left - 1);
    }

    #[actix::test]
    async fn test_timer_runs_out() {
        let session = start_session(Duration::from_millis(5));
        let (client_id, collector) = join(&session).await;

        act(&session, client_id, ClientAction::Start).await;
        tokio::time::sleep(Duration::from_millis(500)).await;

        let state = session.send(GetSnapshot).await.unwrap();
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.time_left, 0);
        assert_eq!(state.end_reason, Some(EndReason::Timeout));
        assert!(!session.send(IsCountdownArmed).await.unwrap());

        let updates = collector.send(Drain).await.unwrap();
        let last = updates.last().unwrap();
        assert!(last.view.controls.play_again);
        assert!(last.cues.iter().any(|cue| cue.kind == CueKind::StopBackground));
        // One update per second of countdown plus the opening ones.
        assert!(updates.len() >= 12);
    }

    #[actix::test]
    async fn test_wrong_guess_then_reset() {
        let session = start_session(Duration::from_secs(3600));
        let (client_id, collector) = join(&session).await;

        act(&session, client_id, ClientAction::Start).await;
        let over = act(&session, client_id, ClientAction::Guess("nobody".into())).await;
        assert_eq!(over.phase, Phase::GameOver);
        assert!(!session.send(IsCountdownArmed).await.unwrap());

        // Start is only the first-play trigger; afterwards it is ignored.
        assert_eq!(act(&session, client_id, ClientAction::Start).await, over);

        let fresh = act(&session, client_id, ClientAction::Reset).await;
        assert_eq!(fresh.phase, Phase::AwaitingGuess);
        assert_eq!(fresh.score, 0);
        assert_eq!(fresh.used_images.len(), 1);
        assert!(session.send(IsCountdownArmed).await.unwrap());

        let updates = collector.send(Drain).await.unwrap();
        let last = updates.last().unwrap();
        assert!(last.cues.iter().any(|cue| cue.kind == CueKind::StartBackground));
        assert_eq!(last.cues[0].src.as_deref(), Some("/audio/bgm.mp3"));
    }

    #[actix::test]
    async fn test_unknown_client_is_ignored() {
        let session = start_session(Duration::from_secs(3600));
        let (_client_id, _collector) = join(&session).await;

        let state = act(&session, Uuid::new_v4(), ClientAction::Start).await;
        assert_eq!(state.phase, Phase::NotStarted);
    }

    #[actix::test]
    async fn test_manager_creates_and_forgets_sessions() {
        let assets: Arc<dyn AssetProvider> = Arc::new(StaticCatalog::default());
        let manager = GameSessionManager::new(assets, SessionTiming::default()).start();

        let game_id = manager.send(CreateGame).await.unwrap();
        let session = manager.send(GetGameSession { game_id }).await.unwrap().unwrap();
        assert!(manager.send(GetGameSession { game_id: Uuid::new_v4() }).await.unwrap().is_err());

        let (client_id, _collector) = join(&session).await;
        session.send(UnregisterSession { client_id }).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(manager.send(GetGameSession { game_id }).await.unwrap().is_err());
    }

    #[actix::test]
    async fn test_reset_in_first_second_restarts_the_clock() {
        let session = start_session(Duration::from_millis(400));
        let (client_id, _collector) = join(&session).await;

        act(&session, client_id, ClientAction::Start).await;
        tokio::time::sleep(Duration::from_millis(300)).await;

        // Same round number and clock as the round it replaces.
        let fresh = act(&session, client_id, ClientAction::Reset).await;
        assert_eq!((fresh.round, fresh.time_left), (1, 10));

        // The tick armed by Start would have landed here.
        tokio::time::sleep(Duration::from_millis(200)).await;
        let state = session.send(GetSnapshot).await.unwrap();
        assert_eq!(state.time_left, 10);
        assert!(session.send(IsCountdownArmed).await.unwrap());

        tokio::time::sleep(Duration::from_millis(300)).await;
        let state = session.send(GetSnapshot).await.unwrap();
        assert_eq!(state.time_left, 9);
    }

    #[actix::test]
    async fn test_session_without_client_closes_after_idle_timeout() {
        let assets: Arc<dyn AssetProvider> = Arc::new(StaticCatalog::default());
        let timing = timing(Duration::from_secs(3600), Duration::from_millis(30));
        let manager = GameSessionManager::new(assets, timing).start();

        let idle = manager.send(CreateGame).await.unwrap();
        let joined = manager.send(CreateGame).await.unwrap();
        let session = manager.send(GetGameSession { game_id: joined }).await.unwrap().unwrap();
        let (_client_id, _collector) = join(&session).await;

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(manager.send(GetGameSession { game_id: idle }).await.unwrap().is_err());
        assert!(manager.send(GetGameSession { game_id: joined }).await.unwrap().is_ok());
    }
}
