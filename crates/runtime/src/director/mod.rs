//! Translates round events into presentation commands.
//!
//! The director is the only place that knows the show's choreography: which
//! cues play, in what order and with what delay. Round events that only
//! concern the producer panel (selection, scores) produce no commands.

mod chaos;

pub use chaos::{ChaosDeck, CueBag};

use feud_core::{
    CueId, GameConfig, PresentationCommand, PresentationConfig, PromptId, PromptStore, RoundEvent,
};
use rand::Rng;

/// Transition delays, in milliseconds.
pub mod timing {
    pub const START_WHOOSH_MS: u32 = 600;
    pub const START_LOAD_IN_MS: u32 = 1_500;
    pub const NEXT_WHOOSH_MS: u32 = 600;
    pub const NEXT_LOAD_IN_MS: u32 = 1_600;
    pub const END_WHOOSH_MS: u32 = 500;
    pub const END_THEME_MS: u32 = 1_800;

    // First-round load-in, measured from START_LOAD_IN_MS.
    pub const LOAD_IN_PROMPT_MS: u32 = 300;
    pub const LOAD_IN_PAUSE_MS: u32 = 500;
    pub const LOAD_IN_STEP_MS: u32 = 300;
    pub const LOAD_IN_GAP_MS: u32 = 100;
}

pub struct Director {
    chaos: ChaosDeck,
    strike_count: usize,
    board_visible: bool,
}

impl Director {
    pub fn new(game: &GameConfig, presentation: &PresentationConfig) -> Self {
        Self {
            chaos: ChaosDeck::new(presentation.effective_chaos_chance()),
            strike_count: game.effective_strike_count(),
            board_visible: false,
        }
    }

    pub fn chaos(&self) -> &ChaosDeck {
        &self.chaos
    }

    /// Whether the last emitted commands left a prompt on the display.
    pub fn board_visible(&self) -> bool {
        self.board_visible
    }

    /// Commands for one event, in the order the display should apply them.
    pub fn direct<R: Rng + ?Sized>(
        &mut self,
        event: &RoundEvent,
        store: &PromptStore,
        rng: &mut R,
    ) -> Vec<PresentationCommand> {
        use PresentationCommand as Cmd;
        use self::timing::*;

        match *event {
            RoundEvent::IntroRequested => vec![
                Cmd::cue(CueId::ThemeWithIntro),
                Cmd::ShowTitle { with_intro: true },
            ],
            RoundEvent::GameStarted { prompt } => {
                let mut commands = vec![
                    Cmd::StopAllCues,
                    Cmd::cue(CueId::Bling),
                    Cmd::delayed_cue(CueId::Whoosh2, START_WHOOSH_MS),
                    Cmd::delayed_cue(CueId::Whoosh1, START_LOAD_IN_MS),
                ];
                if let Some(show) = self.show_prompt(store, prompt, true) {
                    commands.push(show);
                    commands.extend(self.load_in_cues());
                }
                commands
            }
            RoundEvent::RoundAdvanced { prompt, .. } => {
                let mut commands = vec![
                    Cmd::StopAllCues,
                    Cmd::delayed_cue(CueId::Whoosh2, NEXT_WHOOSH_MS),
                    Cmd::HidePrompt,
                    Cmd::delayed_cue(CueId::Whoosh4, NEXT_LOAD_IN_MS),
                ];
                commands.extend(self.show_prompt(store, prompt, false));
                commands
            }
            RoundEvent::AnswerToggled { index, visible } => {
                let mut commands = vec![Cmd::SetAnswerVisible { index, visible }];
                if visible {
                    commands.push(Cmd::cue(self.chaos.correct_cue(rng)));
                }
                commands
            }
            RoundEvent::StrikeToggled { index, visible } => {
                let mut commands = vec![Cmd::SetStrikeVisible { index, visible }];
                if visible {
                    commands.push(Cmd::cue(self.chaos.incorrect_cue(rng)));
                }
                commands
            }
            RoundEvent::GameEnded { .. } => {
                self.board_visible = false;
                vec![
                    Cmd::StopAllCues,
                    Cmd::delayed_cue(CueId::Whoosh2, END_WHOOSH_MS),
                    Cmd::HidePrompt,
                    Cmd::ShowTitle { with_intro: false },
                    Cmd::delayed_cue(self.chaos.end_theme(rng), END_THEME_MS),
                ]
            }
            RoundEvent::SessionReset if self.board_visible => {
                self.board_visible = false;
                vec![
                    Cmd::StopAllCues,
                    Cmd::HidePrompt,
                    Cmd::ShowTitle { with_intro: false },
                ]
            }
            RoundEvent::SessionReset
            | RoundEvent::PromptSelected { .. }
            | RoundEvent::PromptCommitted { .. }
            | RoundEvent::ScoreChanged { .. } => Vec::new(),
        }
    }

    /// A click as each answer fades in, then a bump for each strike slot.
    fn load_in_cues(&self) -> Vec<PresentationCommand> {
        use self::timing::*;

        let answers_at = START_LOAD_IN_MS + LOAD_IN_PROMPT_MS + LOAD_IN_PAUSE_MS;
        let strikes_at =
            answers_at + GameConfig::ANSWER_COUNT as u32 * LOAD_IN_STEP_MS + LOAD_IN_GAP_MS;

        let clicks = (0..GameConfig::ANSWER_COUNT as u32).map(|i| {
            PresentationCommand::delayed_cue(CueId::Click, answers_at + i * LOAD_IN_STEP_MS)
        });
        let bumps = (0..self.strike_count as u32).map(|i| {
            PresentationCommand::delayed_cue(CueId::BaseBump, strikes_at + i * LOAD_IN_STEP_MS)
        });
        clicks.chain(bumps).collect()
    }

    fn show_prompt(
        &mut self,
        store: &PromptStore,
        id: PromptId,
        staged: bool,
    ) -> Option<PresentationCommand> {
        let Some(prompt) = store.get_by_id(id) else {
            tracing::warn!(prompt = id.0, "active prompt missing from store");
            return None;
        };
        self.board_visible = true;
        Some(PresentationCommand::ShowPrompt {
            prompt: id,
            text: prompt.text().to_string(),
            answers: prompt.answers().clone(),
            strike_count: self.strike_count,
            staged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ShowRng;
    use feud_core::{PromptDraft, Scoreboard};

    fn store() -> PromptStore {
        PromptStore::from_drafts(
            "Classic",
            [PromptDraft::new(
                "Name a fruit",
                ["Apple".into(), "Banana".into(), "Cherry".into(), "Date".into()],
            )],
        )
    }

    fn director(chance: f32) -> Director {
        Director::new(
            &GameConfig::default(),
            &PresentationConfig {
                chaos_chance: chance,
            },
        )
    }

    #[test]
    fn game_start_loads_the_board_staged() {
        let mut director = director(0.0);
        let mut rng = ShowRng::new(0);
        let commands = director.direct(
            &RoundEvent::GameStarted {
                prompt: PromptId(0),
            },
            &store(),
            &mut rng,
        );

        assert_eq!(commands[0], PresentationCommand::StopAllCues);
        assert_eq!(commands[1], PresentationCommand::cue(CueId::Bling));
        assert!(commands.iter().any(|command| matches!(
            command,
            PresentationCommand::ShowPrompt {
                staged: true,
                strike_count: 3,
                ..
            }
        )));
        assert!(director.board_visible());

        let delays = |wanted: CueId| -> Vec<u32> {
            commands
                .iter()
                .filter_map(|command| match command {
                    PresentationCommand::PlayCue { cue, delay_ms } if *cue == wanted => {
                        Some(*delay_ms)
                    }
                    _ => None,
                })
                .collect()
        };
        assert_eq!(delays(CueId::Click), vec![2_300, 2_600, 2_900, 3_200]);
        assert_eq!(delays(CueId::BaseBump), vec![3_600, 3_900, 4_200]);
    }

    #[test]
    fn load_in_follows_the_strike_count() {
        let mut director = Director::new(
            &GameConfig::with_strike_count(5),
            &PresentationConfig::default(),
        );
        let mut rng = ShowRng::new(0);
        let commands = director.direct(
            &RoundEvent::GameStarted {
                prompt: PromptId(0),
            },
            &store(),
            &mut rng,
        );
        let bumps = commands
            .iter()
            .filter(|command| {
                **command == PresentationCommand::delayed_cue(CueId::BaseBump, 3_600)
            })
            .count();
        assert_eq!(bumps, 1);
        assert_eq!(
            commands.last(),
            Some(&PresentationCommand::delayed_cue(CueId::BaseBump, 4_800))
        );
    }

    #[test]
    fn later_rounds_skip_the_load_in() {
        let mut director = director(0.0);
        let mut rng = ShowRng::new(0);
        let commands = director.direct(
            &RoundEvent::RoundAdvanced {
                prompt: PromptId(0),
                round: 2,
            },
            &store(),
            &mut rng,
        );
        assert!(!commands.iter().any(|command| matches!(
            command,
            PresentationCommand::PlayCue {
                cue: CueId::Click | CueId::BaseBump,
                ..
            }
        )));
    }

    #[test]
    fn hiding_an_answer_plays_nothing() {
        let mut director = director(1.0);
        let mut rng = ShowRng::new(0);
        let commands = director.direct(
            &RoundEvent::AnswerToggled {
                index: 1,
                visible: false,
            },
            &store(),
            &mut rng,
        );
        assert_eq!(
            commands,
            vec![PresentationCommand::SetAnswerVisible {
                index: 1,
                visible: false
            }]
        );
    }

    #[test]
    fn strikes_play_the_buzzer_without_chaos() {
        let mut director = director(0.0);
        let mut rng = ShowRng::new(0);
        let commands = director.direct(
            &RoundEvent::StrikeToggled {
                index: 0,
                visible: true,
            },
            &store(),
            &mut rng,
        );
        assert_eq!(commands[1], PresentationCommand::cue(CueId::IncorrectAnswer));
    }

    #[test]
    fn end_game_returns_to_title_with_theme() {
        let mut director = director(0.0);
        let mut rng = ShowRng::new(0);
        let commands = director.direct(
            &RoundEvent::GameEnded {
                final_scores: Scoreboard::default(),
            },
            &store(),
            &mut rng,
        );
        assert_eq!(
            commands,
            vec![
                PresentationCommand::StopAllCues,
                PresentationCommand::delayed_cue(CueId::Whoosh2, 500),
                PresentationCommand::HidePrompt,
                PresentationCommand::ShowTitle { with_intro: false },
                PresentationCommand::delayed_cue(CueId::ThemeNoIntro, 1_800),
            ]
        );
    }

    #[test]
    fn reset_only_clears_a_visible_board() {
        let mut director = director(0.0);
        let mut rng = ShowRng::new(0);
        let store = store();
        assert!(director
            .direct(&RoundEvent::SessionReset, &store, &mut rng)
            .is_empty());

        director.direct(
            &RoundEvent::GameStarted {
                prompt: PromptId(0),
            },
            &store,
            &mut rng,
        );
        let commands = director.direct(&RoundEvent::SessionReset, &store, &mut rng);
        assert_eq!(commands.len(), 3);
        assert!(!director.board_visible());
    }

    #[test]
    fn producer_only_events_are_silent() {
        let mut director = director(1.0);
        let mut rng = ShowRng::new(0);
        let store = store();
        for event in [
            RoundEvent::PromptSelected {
                prompt: PromptId(0),
                random: true,
            },
            RoundEvent::PromptCommitted {
                prompt: PromptId(0),
            },
            RoundEvent::ScoreChanged {
                team: feud_core::Team::Red,
                score: 2,
            },
        ] {
            assert!(director.direct(&event, &store, &mut rng).is_empty());
        }
    }
}
