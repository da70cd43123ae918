//! Round bookkeeping: phase, reveal flags and team scores.
use crate::config::GameConfig;
use crate::prompt::PromptId;

/// Lifecycle phase of a game.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RoundPhase {
    #[default]
    NotStarted,
    InRound,
    Ended,
}

/// The two competing teams.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    Red,
    Blue,
}

/// Team scores. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    pub red: u32,
    pub blue: u32,
}

impl Scoreboard {
    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
        }
    }

    /// Applies `delta`, clamping the result at zero. Returns the new score.
    pub fn adjust(&mut self, team: Team, delta: i32) -> u32 {
        let slot = match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        };
        let next = (i64::from(*slot) + i64::from(delta)).clamp(0, i64::from(u32::MAX));
        *slot = next as u32;
        *slot
    }
}

/// Everything the producer and player screens show about the current round.
///
/// Flag lengths are fixed when the state is created and never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    pub(crate) phase: RoundPhase,
    pub(crate) active_prompt: Option<PromptId>,
    pub(crate) answer_revealed: [bool; GameConfig::ANSWER_COUNT],
    pub(crate) strike_revealed: Box<[bool]>,
    pub(crate) scores: Scoreboard,
    pub(crate) round_number: u32,
}

impl RoundState {
    pub fn new(strike_count: usize) -> Self {
        Self {
            phase: RoundPhase::NotStarted,
            active_prompt: None,
            answer_revealed: [false; GameConfig::ANSWER_COUNT],
            strike_revealed: vec![false; strike_count].into_boxed_slice(),
            scores: Scoreboard::default(),
            round_number: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.effective_strike_count())
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn active_prompt(&self) -> Option<PromptId> {
        self.active_prompt
    }

    pub fn answer_revealed(&self) -> &[bool; GameConfig::ANSWER_COUNT] {
        &self.answer_revealed
    }

    pub fn strike_revealed(&self) -> &[bool] {
        &self.strike_revealed
    }

    pub fn strike_count(&self) -> usize {
        self.strike_revealed.len()
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn score(&self, team: Team) -> u32 {
        self.scores.get(team)
    }

    /// 1-based number of the current round within the game; 0 before the first.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub(crate) fn clear_flags(&mut self) {
        self.answer_revealed = [false; GameConfig::ANSWER_COUNT];
        self.strike_revealed.iter_mut().for_each(|flag| *flag = false);
    }
}
