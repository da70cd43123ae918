//! Input processing for the control panel.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use feud_core::{ProducerCommand, Team};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the prompt list cursor by this many rows.
    MoveCursor(isize),
    /// Select the prompt under the cursor.
    SelectHighlighted,
    /// Flip the visibility of an answer slot.
    ToggleAnswer(usize),
    /// Flip the visibility of a strike slot.
    ToggleStrike(usize),
    /// Show the first hidden strike.
    NextStrike,
    /// Hide the last visible strike.
    UndoStrike,
    /// Submit a command that needs no board context.
    Submit(ProducerCommand),
    /// No meaningful command was produced.
    None,
}

const PAGE: isize = 10;

/// Translates `KeyEvent`s into panel actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level action.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Up => KeyAction::MoveCursor(-1),
            KeyCode::Down => KeyAction::MoveCursor(1),
            KeyCode::PageUp => KeyAction::MoveCursor(-PAGE),
            KeyCode::PageDown => KeyAction::MoveCursor(PAGE),
            KeyCode::Home => KeyAction::MoveCursor(isize::MIN),
            KeyCode::End => KeyAction::MoveCursor(isize::MAX),
            KeyCode::Enter => KeyAction::SelectHighlighted,
            KeyCode::F(n @ 1..=12) => KeyAction::ToggleStrike(usize::from(n) - 1),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            'q' => KeyAction::Quit,
            'k' => KeyAction::MoveCursor(-1),
            'j' => KeyAction::MoveCursor(1),
            '1'..='4' => KeyAction::ToggleAnswer(ch as usize - '1' as usize),
            'w' => KeyAction::NextStrike,
            'u' => KeyAction::UndoStrike,
            'r' => KeyAction::Submit(ProducerCommand::SelectRandom),
            's' => KeyAction::Submit(ProducerCommand::StartGame),
            'n' => KeyAction::Submit(ProducerCommand::NextRound),
            'e' => KeyAction::Submit(ProducerCommand::EndGame),
            'x' => KeyAction::Submit(ProducerCommand::Reset),
            'i' => KeyAction::Submit(ProducerCommand::Intro),
            'f' => score(Team::Red, 1),
            'v' => score(Team::Red, -1),
            'h' => score(Team::Blue, 1),
            'b' => score(Team::Blue, -1),
            _ => KeyAction::None,
        }
    }
}

fn score(team: Team, delta: i32) -> KeyAction {
    KeyAction::Submit(ProducerCommand::AdjustScore { team, delta })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Quit);

        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert_eq!(handler.handle_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn digits_toggle_answers() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('1'))),
            KeyAction::ToggleAnswer(0)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('4'))),
            KeyAction::ToggleAnswer(3)
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('5'))), KeyAction::None);
    }

    #[test]
    fn function_keys_toggle_strikes() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::F(1))),
            KeyAction::ToggleStrike(0)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::F(3))),
            KeyAction::ToggleStrike(2)
        );
    }

    #[test]
    fn uppercase_maps_like_lowercase() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('S'))),
            KeyAction::Submit(ProducerCommand::StartGame)
        );
    }

    #[test]
    fn score_keys_carry_team_and_sign() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('v'))),
            KeyAction::Submit(ProducerCommand::AdjustScore {
                team: Team::Red,
                delta: -1
            })
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('h'))),
            KeyAction::Submit(ProducerCommand::AdjustScore {
                team: Team::Blue,
                delta: 1
            })
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let handler = InputHandler::new();
        let mut release = key(KeyCode::Char('s'));
        release.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(release), KeyAction::None);
    }
}
