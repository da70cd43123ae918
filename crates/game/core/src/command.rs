//! Producer commands and their one-line text form.
//!
//! The text form is what scripted sessions are written in:
//!
//! ```text
//! select 3
//! random
//! start
//! answer 0 on
//! strike 1 on
//! score red +1
//! next
//! end
//! reset
//! intro
//! ```
use core::fmt;
use core::str::FromStr;

use crate::prompt::PromptId;
use crate::round::Team;

/// One control-panel action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "command", rename_all = "snake_case"))]
pub enum ProducerCommand {
    /// Make `id` the pending prompt.
    SelectPrompt { id: PromptId },
    /// Draw the pending prompt from the unplayed pool.
    SelectRandom,
    /// Commit the pending prompt and start the first round.
    StartGame,
    /// Commit the pending prompt and move on to the next round.
    NextRound,
    EndGame,
    /// Start a new session with a full prompt pool.
    Reset,
    /// Title screen with the theme intro.
    Intro,
    RevealAnswer { index: usize, visible: bool },
    RevealStrike { index: usize, visible: bool },
    AdjustScore { team: Team, delta: i32 },
}

impl ProducerCommand {
    /// Stable name used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectPrompt { .. } => "select",
            Self::SelectRandom => "random",
            Self::StartGame => "start",
            Self::NextRound => "next",
            Self::EndGame => "end",
            Self::Reset => "reset",
            Self::Intro => "intro",
            Self::RevealAnswer { .. } => "answer",
            Self::RevealStrike { .. } => "strike",
            Self::AdjustScore { .. } => "score",
        }
    }
}

/// Errors returned when a script line cannot be read as a command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid {expected} `{value}` for `{command}`")]
    InvalidArgument {
        command: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

struct Args<'a> {
    command: &'static str,
    words: core::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseCommandError> {
        let word = self.words.next().ok_or(ParseCommandError::MissingArgument {
            command: self.command,
            expected,
        })?;
        word.parse().map_err(|_| ParseCommandError::InvalidArgument {
            command: self.command,
            expected,
            value: word.to_string(),
        })
    }

    fn toggle(&mut self) -> Result<bool, ParseCommandError> {
        let word = self.words.next().ok_or(ParseCommandError::MissingArgument {
            command: self.command,
            expected: "on|off",
        })?;
        match word.to_ascii_lowercase().as_str() {
            "on" | "show" | "true" => Ok(true),
            "off" | "hide" | "false" => Ok(false),
            _ => Err(ParseCommandError::InvalidArgument {
                command: self.command,
                expected: "on|off",
                value: word.to_string(),
            }),
        }
    }

    fn finish(mut self) -> Result<(), ParseCommandError> {
        match self.words.next() {
            None => Ok(()),
            Some(extra) => Err(ParseCommandError::TrailingInput(extra.to_string())),
        }
    }
}

impl FromStr for ProducerCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(ParseCommandError::Empty)?;

        let command = match verb.to_ascii_lowercase().as_str() {
            "select" => "select",
            "random" => "random",
            "start" => "start",
            "next" => "next",
            "end" => "end",
            "reset" => "reset",
            "intro" => "intro",
            "answer" => "answer",
            "strike" => "strike",
            "score" => "score",
            _ => return Err(ParseCommandError::UnknownCommand(verb.to_string())),
        };
        let mut args = Args { command, words };

        let parsed = match command {
            "select" => Self::SelectPrompt {
                id: PromptId(args.next("prompt id")?),
            },
            "random" => Self::SelectRandom,
            "start" => Self::StartGame,
            "next" => Self::NextRound,
            "end" => Self::EndGame,
            "reset" => Self::Reset,
            "intro" => Self::Intro,
            "answer" => Self::RevealAnswer {
                index: args.next("answer index")?,
                visible: args.toggle()?,
            },
            "strike" => Self::RevealStrike {
                index: args.next("strike index")?,
                visible: args.toggle()?,
            },
            _ => Self::AdjustScore {
                team: args.next("team")?,
                delta: args.next("score delta")?,
            },
        };
        args.finish()?;
        Ok(parsed)
    }
}

impl fmt::Display for ProducerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toggle = |visible: bool| if visible { "on" } else { "off" };
        match self {
            Self::SelectPrompt { id } => write!(f, "select {id}"),
            Self::RevealAnswer { index, visible } => {
                write!(f, "answer {index} {}", toggle(*visible))
            }
            Self::RevealStrike { index, visible } => {
                write!(f, "strike {index} {}", toggle(*visible))
            }
            Self::AdjustScore { team, delta } => write!(f, "score {team} {delta:+}"),
            other => f.write_str(other.name()),
        }
    }
}
