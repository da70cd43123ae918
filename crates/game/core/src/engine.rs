//! The round state machine.
//!
//! [`GameEngine`] is the only writer of [`GameState`]. Every operation checks
//! all of its preconditions before touching anything, so an `Err` always
//! means the state is unchanged.
use rand::Rng;

use crate::command::ProducerCommand;
use crate::config::{GameConfig, ScorePolicy};
use crate::error::{RevealKind, RoundError};
use crate::event::RoundEvent;
use crate::prompt::{PromptId, PromptStore};
use crate::round::{RoundPhase, RoundState, Scoreboard, Team};
use crate::selector::RoundSelector;

/// Everything that changes while the show runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub round: RoundState,
    pub selector: RoundSelector,
}

impl GameState {
    pub fn new(store: &PromptStore, config: &GameConfig) -> Self {
        Self {
            round: RoundState::from_config(config),
            selector: RoundSelector::for_store(store, config.replay_policy),
        }
    }
}

/// Applies producer operations to a [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Routes a producer command to the matching operation.
    ///
    /// `start` and `next` commit the pending prompt as part of the same step,
    /// so they yield a `PromptCommitted` event ahead of the round event.
    pub fn execute<R: Rng + ?Sized>(
        &mut self,
        command: &ProducerCommand,
        rng: &mut R,
    ) -> Result<Vec<RoundEvent>, RoundError> {
        let events = match *command {
            ProducerCommand::SelectPrompt { id } => vec![self.select_prompt(id)?],
            ProducerCommand::SelectRandom => vec![self.select_random(rng)?],
            ProducerCommand::StartGame => self.start_pending_game()?.to_vec(),
            ProducerCommand::NextRound => self.advance_to_pending()?.to_vec(),
            ProducerCommand::EndGame => vec![self.end_game()?],
            ProducerCommand::Reset => vec![self.reset()],
            ProducerCommand::Intro => vec![self.intro()?],
            ProducerCommand::RevealAnswer { index, visible } => {
                vec![self.reveal_answer(index, visible)?]
            }
            ProducerCommand::RevealStrike { index, visible } => {
                vec![self.reveal_strike(index, visible)?]
            }
            ProducerCommand::AdjustScore { team, delta } => vec![self.adjust_score(team, delta)?],
        };
        Ok(events)
    }

    // ===== selection =====

    pub fn select_prompt(&mut self, id: PromptId) -> Result<RoundEvent, RoundError> {
        self.state.selector.select_explicit(id)?;
        Ok(RoundEvent::PromptSelected {
            prompt: id,
            random: false,
        })
    }

    pub fn select_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<RoundEvent, RoundError> {
        let prompt = self.state.selector.select_random(rng)?;
        Ok(RoundEvent::PromptSelected {
            prompt,
            random: true,
        })
    }

    pub fn commit_pending(&mut self) -> Result<RoundEvent, RoundError> {
        let prompt = self.state.selector.commit_pending()?;
        Ok(RoundEvent::PromptCommitted { prompt })
    }

    // ===== round transitions =====

    /// Starts the first round of a game with the freshly committed prompt.
    pub fn start_game(&mut self, prompt: PromptId) -> Result<RoundEvent, RoundError> {
        self.require_phase(RoundPhase::NotStarted, "start the game")?;
        self.state.selector.claim(prompt)?;

        let round = &mut self.state.round;
        round.clear_flags();
        if self.config.score_policy == ScorePolicy::ResetOnStart {
            round.scores = Scoreboard::default();
        }
        round.active_prompt = Some(prompt);
        round.round_number = 1;
        round.phase = RoundPhase::InRound;
        Ok(RoundEvent::GameStarted { prompt })
    }

    /// Moves to the next round with the freshly committed prompt. Scores are kept.
    pub fn next_round(&mut self, prompt: PromptId) -> Result<RoundEvent, RoundError> {
        self.require_phase(RoundPhase::InRound, "advance the round")?;
        self.state.selector.claim(prompt)?;

        let round = &mut self.state.round;
        round.clear_flags();
        round.active_prompt = Some(prompt);
        round.round_number += 1;
        Ok(RoundEvent::RoundAdvanced {
            prompt,
            round: round.round_number,
        })
    }

    /// Commits the pending prompt and starts a game with it in one step.
    pub fn start_pending_game(&mut self) -> Result<[RoundEvent; 2], RoundError> {
        self.require_phase(RoundPhase::NotStarted, "start the game")?;
        self.state.selector.check_commit()?;

        let committed = self.commit_pending()?;
        let prompt = self.state.selector.unclaimed().ok_or(RoundError::NoPendingPrompt)?;
        let started = self.start_game(prompt)?;
        Ok([committed, started])
    }

    /// Commits the pending prompt and advances to it in one step.
    pub fn advance_to_pending(&mut self) -> Result<[RoundEvent; 2], RoundError> {
        self.require_phase(RoundPhase::InRound, "advance the round")?;
        self.state.selector.check_commit()?;

        let committed = self.commit_pending()?;
        let prompt = self.state.selector.unclaimed().ok_or(RoundError::NoPendingPrompt)?;
        let advanced = self.next_round(prompt)?;
        Ok([committed, advanced])
    }

    pub fn end_game(&mut self) -> Result<RoundEvent, RoundError> {
        self.require_phase(RoundPhase::InRound, "end the game")?;

        let round = &mut self.state.round;
        let final_scores = round.scores;
        round.clear_flags();
        round.active_prompt = None;
        if self.config.score_policy == ScorePolicy::ResetOnStart {
            round.scores = Scoreboard::default();
        }
        round.phase = RoundPhase::Ended;
        Ok(RoundEvent::GameEnded { final_scores })
    }

    /// Starts a new session. Valid from any phase.
    pub fn reset(&mut self) -> RoundEvent {
        self.state.selector.reset();

        let round = &mut self.state.round;
        round.clear_flags();
        round.active_prompt = None;
        round.round_number = 0;
        if self.config.score_policy == ScorePolicy::ResetOnStart {
            round.scores = Scoreboard::default();
        }
        round.phase = RoundPhase::NotStarted;
        RoundEvent::SessionReset
    }

    /// Title screen request. Not allowed while a round is on the board.
    pub fn intro(&mut self) -> Result<RoundEvent, RoundError> {
        let phase = self.state.round.phase;
        if phase == RoundPhase::InRound {
            return Err(RoundError::transition("play the intro", phase));
        }
        Ok(RoundEvent::IntroRequested)
    }

    // ===== in-round edits =====

    pub fn reveal_answer(&mut self, index: usize, visible: bool) -> Result<RoundEvent, RoundError> {
        self.require_phase(RoundPhase::InRound, "reveal an answer")?;
        let flags = &mut self.state.round.answer_revealed;
        let len = flags.len();
        let flag = flags.get_mut(index).ok_or(RoundError::IndexOutOfRange {
            kind: RevealKind::Answer,
            index,
            len,
        })?;
        *flag = visible;
        Ok(RoundEvent::AnswerToggled { index, visible })
    }

    pub fn reveal_strike(&mut self, index: usize, visible: bool) -> Result<RoundEvent, RoundError> {
        self.require_phase(RoundPhase::InRound, "reveal a strike")?;
        let flags = &mut self.state.round.strike_revealed;
        let len = flags.len();
        let flag = flags.get_mut(index).ok_or(RoundError::IndexOutOfRange {
            kind: RevealKind::Strike,
            index,
            len,
        })?;
        *flag = visible;
        Ok(RoundEvent::StrikeToggled { index, visible })
    }

    pub fn adjust_score(&mut self, team: Team, delta: i32) -> Result<RoundEvent, RoundError> {
        self.require_phase(RoundPhase::InRound, "adjust the score")?;
        let score = self.state.round.scores.adjust(team, delta);
        Ok(RoundEvent::ScoreChanged { team, score })
    }

    fn require_phase(&self, expected: RoundPhase, command: &'static str) -> Result<(), RoundError> {
        let phase = self.state.round.phase;
        if phase == expected {
            Ok(())
        } else {
            Err(RoundError::transition(command, phase))
        }
    }
}
