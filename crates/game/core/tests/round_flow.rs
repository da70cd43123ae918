use feud_core::{
    GameConfig, GameEngine, GameState, PromptDraft, PromptId, PromptStore, RoundError,
    RoundEvent, RoundPhase, Scoreboard, Team,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn store(n: u32) -> PromptStore {
    PromptStore::from_drafts(
        "Classic",
        (0..n).map(|i| {
            PromptDraft::new(
                format!("Name something #{i}"),
                [
                    format!("{i}-a"),
                    format!("{i}-b"),
                    format!("{i}-c"),
                    format!("{i}-d"),
                ],
            )
        }),
    )
}

fn ids(state: &GameState) -> Vec<u32> {
    state.selector.remaining().iter().map(|id| id.0).collect()
}

#[test]
fn three_prompt_walkthrough() {
    let config = GameConfig::default();
    let mut state = GameState::new(&store(3), &config);
    let mut engine = GameEngine::new(&mut state, &config);

    engine.select_prompt(PromptId(1)).unwrap();
    engine.commit_pending().unwrap();
    engine.start_game(PromptId(1)).unwrap();
    engine.reveal_answer(2, true).unwrap();
    engine.adjust_score(Team::Red, 1).unwrap();
    assert_eq!(state.selector.active(), Some(PromptId(1)));
    assert_eq!(ids(&state), vec![0, 2]);
    assert_eq!(state.round.phase(), RoundPhase::InRound);
    assert_eq!(state.round.answer_revealed(), &[false, false, true, false]);

    let mut engine = GameEngine::new(&mut state, &config);
    engine.select_prompt(PromptId(0)).unwrap();
    engine.commit_pending().unwrap();
    engine.next_round(PromptId(0)).unwrap();
    assert_eq!(state.round.answer_revealed(), &[false; 4]);
    assert!(state.round.strike_revealed().iter().all(|flag| !flag));
    assert_eq!(state.round.scores(), Scoreboard { red: 1, blue: 0 });
    assert_eq!(state.round.active_prompt(), Some(PromptId(0)));
    assert_eq!(ids(&state), vec![2]);

    let mut engine = GameEngine::new(&mut state, &config);
    assert_eq!(
        engine.end_game(),
        Ok(RoundEvent::GameEnded {
            final_scores: Scoreboard { red: 1, blue: 0 }
        })
    );
    assert_eq!(state.round.phase(), RoundPhase::Ended);
}

#[test]
fn random_draw_on_empty_pool_fails_without_change() {
    let config = GameConfig::default();
    let mut state = GameState::new(&store(1), &config);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let mut engine = GameEngine::new(&mut state, &config);
    engine.select_random(&mut rng).unwrap();
    engine.start_pending_game().unwrap();

    let before = state.clone();
    let mut engine = GameEngine::new(&mut state, &config);
    assert_eq!(
        engine.select_random(&mut rng),
        Err(RoundError::NoPromptsAvailable)
    );
    assert_eq!(state, before);
}

#[test]
fn failed_commands_leave_state_identical() {
    let config = GameConfig::default();
    let mut state = GameState::new(&store(2), &config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.select_prompt(PromptId(0)).unwrap();
    engine.start_pending_game().unwrap();
    engine.reveal_strike(0, true).unwrap();

    let before = state.clone();
    let mut engine = GameEngine::new(&mut state, &config);
    assert!(engine.select_prompt(PromptId(9)).is_err());
    assert!(engine.reveal_answer(7, true).is_err());
    assert!(engine.reveal_strike(3, true).is_err());
    assert!(engine.advance_to_pending().is_err());
    assert!(engine.start_game(PromptId(1)).is_err());
    assert!(engine.next_round(PromptId(0)).is_err());
    assert_eq!(state, before);
}

#[test]
fn played_prompt_is_refused_on_the_next_round() {
    let config = GameConfig::default();
    let mut state = GameState::new(&store(2), &config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.select_prompt(PromptId(0)).unwrap();
    engine.start_pending_game().unwrap();
    engine.select_prompt(PromptId(0)).unwrap();

    assert_eq!(
        engine.advance_to_pending(),
        Err(RoundError::PromptAlreadyPlayed(PromptId(0)))
    );
}

#[derive(Clone, Debug)]
enum Step {
    Random,
    Explicit(u32),
    Start,
    Next,
    Answer(usize),
    Strike(usize),
    Score(bool, i32),
    End,
    Reset,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => Just(Step::Random),
        2 => (0u32..8).prop_map(Step::Explicit),
        3 => Just(Step::Start),
        3 => Just(Step::Next),
        2 => (0usize..5).prop_map(Step::Answer),
        2 => (0usize..4).prop_map(Step::Strike),
        2 => (any::<bool>(), -3i32..4).prop_map(|(red, delta)| Step::Score(red, delta)),
        1 => Just(Step::End),
        1 => Just(Step::Reset),
    ]
}

proptest! {
    #[test]
    fn selector_and_round_invariants_hold(seed in any::<u64>(), steps in prop::collection::vec(step(), 1..60)) {
        let config = GameConfig::default();
        let store = store(6);
        let mut state = GameState::new(&store, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut committed_this_session: Vec<PromptId> = Vec::new();

        for step in steps {
            let remaining_before = state.selector.remaining().clone();
            let scores_before = state.round.scores();
            let before = state.clone();
            let mut engine = GameEngine::new(&mut state, &config);

            let result = match step {
                Step::Random => engine.select_random(&mut rng).map(|event| vec![event]),
                Step::Explicit(id) => engine.select_prompt(PromptId(id)).map(|event| vec![event]),
                Step::Start => engine.start_pending_game().map(Vec::from),
                Step::Next => engine.advance_to_pending().map(Vec::from),
                Step::Answer(index) => engine.reveal_answer(index, true).map(|event| vec![event]),
                Step::Strike(index) => engine.reveal_strike(index, true).map(|event| vec![event]),
                Step::Score(red, delta) => {
                    let team = if red { Team::Red } else { Team::Blue };
                    engine.adjust_score(team, delta).map(|event| vec![event])
                }
                Step::End => engine.end_game().map(|event| vec![event]),
                Step::Reset => Ok(vec![engine.reset()]),
            };

            let events = match result {
                Ok(events) => events,
                Err(_) => {
                    prop_assert_eq!(&state, &before);
                    continue;
                }
            };

            for event in &events {
                match *event {
                    RoundEvent::PromptSelected { prompt, random: true } => {
                        prop_assert!(remaining_before.contains(&prompt));
                    }
                    RoundEvent::PromptCommitted { prompt } => {
                        prop_assert!(!committed_this_session.contains(&prompt));
                        committed_this_session.push(prompt);
                        prop_assert!(!state.selector.remaining().contains(&prompt));
                        prop_assert_eq!(state.selector.active(), Some(prompt));
                    }
                    RoundEvent::RoundAdvanced { .. } => {
                        prop_assert_eq!(state.round.scores(), scores_before);
                        prop_assert!(state.round.answer_revealed().iter().all(|flag| !flag));
                        prop_assert!(state.round.strike_revealed().iter().all(|flag| !flag));
                    }
                    RoundEvent::SessionReset => committed_this_session.clear(),
                    _ => {}
                }
            }

            prop_assert_eq!(state.round.strike_count(), config.effective_strike_count());
            prop_assert_eq!(
                state.selector.remaining().len() + state.selector.played().len(),
                store.len()
            );
        }
    }
}
