//! Events emitted by successful selector and round transitions.
use crate::prompt::PromptId;
use crate::round::{Scoreboard, Team};

/// What changed as the result of one producer command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundEvent {
    /// A prompt became the pending choice for the next round.
    PromptSelected { prompt: PromptId, random: bool },
    /// The pending prompt left the pool and became active.
    PromptCommitted { prompt: PromptId },
    /// First round of a game began.
    GameStarted { prompt: PromptId },
    /// A later round began; scores were kept.
    RoundAdvanced { prompt: PromptId, round: u32 },
    AnswerToggled { index: usize, visible: bool },
    StrikeToggled { index: usize, visible: bool },
    ScoreChanged { team: Team, score: u32 },
    /// The game ended. `final_scores` are the scores at the moment it ended.
    GameEnded { final_scores: Scoreboard },
    /// A new session began with a full prompt pool.
    SessionReset,
    /// Title screen with the theme intro, outside of any round.
    IntroRequested,
}

impl RoundEvent {
    /// Short label used in logs and feeds.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PromptSelected { .. } => "prompt_selected",
            Self::PromptCommitted { .. } => "prompt_committed",
            Self::GameStarted { .. } => "game_started",
            Self::RoundAdvanced { .. } => "round_advanced",
            Self::AnswerToggled { .. } => "answer_toggled",
            Self::StrikeToggled { .. } => "strike_toggled",
            Self::ScoreChanged { .. } => "score_changed",
            Self::GameEnded { .. } => "game_ended",
            Self::SessionReset => "session_reset",
            Self::IntroRequested => "intro_requested",
        }
    }
}
