//! Control panel state: prompt cursor, recent display feed and messages.
use std::collections::VecDeque;

use feud_core::{
    PresentationCommand, ProducerCommand, PromptId, PromptStore, RoundEvent, RoundState,
};
use feud_runtime::DispatchOutcome;

use crate::input::KeyAction;
use crate::message::MessageLog;

/// Display commands kept for the feed panel.
const FEED_CAPACITY: usize = 64;

/// What the event loop should do after a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Quit,
    Dispatch(ProducerCommand),
    Idle,
}

#[derive(Debug)]
pub struct PanelState {
    /// Row in the prompt list, in store order.
    pub cursor: usize,
    pub feed: VecDeque<PresentationCommand>,
    pub messages: MessageLog,
}

impl PanelState {
    pub fn new(message_capacity: usize) -> Self {
        Self {
            cursor: 0,
            feed: VecDeque::with_capacity(FEED_CAPACITY),
            messages: MessageLog::new(message_capacity),
        }
    }

    /// Prompt under the cursor.
    pub fn highlighted(&self, store: &PromptStore) -> Option<PromptId> {
        store.iter().nth(self.cursor).map(|prompt| prompt.id())
    }

    /// Turn a key action into the next step, moving the cursor when asked.
    ///
    /// Toggles read the current flags so one key flips a slot either way.
    pub fn apply(&mut self, action: KeyAction, store: &PromptStore, round: &RoundState) -> Step {
        let command = match action {
            KeyAction::Quit => return Step::Quit,
            KeyAction::None => return Step::Idle,
            KeyAction::MoveCursor(delta) => {
                self.move_cursor(delta, store.len());
                return Step::Idle;
            }
            KeyAction::SelectHighlighted => match self.highlighted(store) {
                Some(id) => ProducerCommand::SelectPrompt { id },
                None => return Step::Idle,
            },
            KeyAction::ToggleAnswer(index) => ProducerCommand::RevealAnswer {
                index,
                visible: !round.answer_revealed().get(index).copied().unwrap_or(false),
            },
            KeyAction::ToggleStrike(index) => ProducerCommand::RevealStrike {
                index,
                visible: !round.strike_revealed().get(index).copied().unwrap_or(false),
            },
            KeyAction::NextStrike => {
                match round.strike_revealed().iter().position(|shown| !shown) {
                    Some(index) => ProducerCommand::RevealStrike {
                        index,
                        visible: true,
                    },
                    None => {
                        self.messages.warn("every strike is already showing");
                        return Step::Idle;
                    }
                }
            }
            KeyAction::UndoStrike => {
                match round.strike_revealed().iter().rposition(|shown| *shown) {
                    Some(index) => ProducerCommand::RevealStrike {
                        index,
                        visible: false,
                    },
                    None => return Step::Idle,
                }
            }
            KeyAction::Submit(command) => command,
        };
        Step::Dispatch(command)
    }

    fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let last = len - 1;
        self.cursor = if delta.is_negative() {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            self.cursor.saturating_add(delta.unsigned_abs()).min(last)
        };
    }

    /// Record a successful dispatch in the feed and message log.
    pub fn record(&mut self, outcome: &DispatchOutcome, store: &PromptStore) {
        for event in &outcome.events {
            self.messages.info(describe_event(event, store));
        }
        for command in &outcome.commands {
            if self.feed.len() == FEED_CAPACITY {
                self.feed.pop_front();
            }
            self.feed.push_back(command.clone());
        }
    }
}

/// One-line producer-facing description of an event.
pub fn describe_event(event: &RoundEvent, store: &PromptStore) -> String {
    let text = |prompt: PromptId| {
        store
            .get_by_id(prompt)
            .map(|p| p.text().to_owned())
            .unwrap_or_default()
    };
    match event {
        RoundEvent::PromptSelected { prompt, random } => {
            let how = if *random { "drew" } else { "picked" };
            format!("{how} #{prompt}: {}", text(*prompt))
        }
        RoundEvent::PromptCommitted { prompt } => format!("locked in #{prompt}"),
        RoundEvent::GameStarted { prompt } => format!("game started with #{prompt}"),
        RoundEvent::RoundAdvanced { prompt, round } => {
            format!("round {round} with #{prompt}")
        }
        RoundEvent::AnswerToggled { index, visible } => {
            format!("answer {} {}", index + 1, on_off(*visible))
        }
        RoundEvent::StrikeToggled { index, visible } => {
            format!("strike {} {}", index + 1, on_off(*visible))
        }
        RoundEvent::ScoreChanged { team, score } => format!("{team} now {score}"),
        RoundEvent::GameEnded { final_scores } => format!(
            "game over: red {} / blue {}",
            final_scores.red, final_scores.blue
        ),
        RoundEvent::SessionReset => "new session, every prompt is back".to_owned(),
        RoundEvent::IntroRequested => "intro".to_owned(),
    }
}

/// Short text for the feed panel.
pub fn describe_command(command: &PresentationCommand) -> String {
    match command {
        PresentationCommand::ShowTitle { with_intro } => {
            format!("show title{}", if *with_intro { " (intro)" } else { "" })
        }
        PresentationCommand::ShowPrompt {
            prompt, staged, ..
        } => format!("show prompt #{prompt}{}", if *staged { " (staged)" } else { "" }),
        PresentationCommand::HidePrompt => "hide prompt".to_owned(),
        PresentationCommand::SetAnswerVisible { index, visible } => {
            format!("answer {} {}", index + 1, on_off(*visible))
        }
        PresentationCommand::SetStrikeVisible { index, visible } => {
            format!("strike {} {}", index + 1, on_off(*visible))
        }
        PresentationCommand::PlayCue { cue, delay_ms: 0 } => format!("cue {}", cue.key()),
        PresentationCommand::PlayCue { cue, delay_ms } => {
            format!("cue {} +{delay_ms}ms", cue.key())
        }
        PresentationCommand::StopAllCues => "stop cues".to_owned(),
    }
}

fn on_off(visible: bool) -> &'static str {
    if visible { "shown" } else { "hidden" }
}
