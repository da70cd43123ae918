/// Show rules and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of strike markers per round. Fixed for the lifetime of a
    /// [`RoundState`](crate::RoundState).
    pub strike_count: usize,
    /// What happens to team scores when a game ends and a new one starts.
    pub score_policy: ScorePolicy,
    /// Whether a prompt that already left the pool may be committed again.
    pub replay_policy: ReplayPolicy,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Every prompt has exactly this many ranked answers.
    pub const ANSWER_COUNT: usize = 4;
    pub const MAX_STRIKE_COUNT: usize = 9;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STRIKE_COUNT: usize = 3;

    pub fn new() -> Self {
        Self {
            strike_count: Self::DEFAULT_STRIKE_COUNT,
            score_policy: ScorePolicy::default(),
            replay_policy: ReplayPolicy::default(),
        }
    }

    pub fn with_strike_count(strike_count: usize) -> Self {
        Self {
            strike_count,
            ..Self::new()
        }
    }

    /// Strike count clamped to `1..=MAX_STRIKE_COUNT`.
    pub fn effective_strike_count(&self) -> usize {
        self.strike_count.clamp(1, Self::MAX_STRIKE_COUNT)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Score lifetime across games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ScorePolicy {
    /// Scores start at zero with every game and are dropped when it ends.
    #[default]
    ResetOnStart,
    /// Scores survive the end of a game, a session reset and the next start.
    CarryOver,
}

/// Whether played prompts can be committed again within a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReplayPolicy {
    #[default]
    Forbid,
    Allow,
}

/// Presentation tuning shared by the director and frontends.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PresentationConfig {
    /// Probability in `[0, 1]` that an answer cue is replaced by a chaos cue.
    pub chaos_chance: f32,
}

impl PresentationConfig {
    pub const DEFAULT_CHAOS_CHANCE: f32 = 0.0;

    /// Chaos chance clamped to `[0, 1]`; NaN counts as disabled.
    pub fn effective_chaos_chance(&self) -> f32 {
        if self.chaos_chance.is_nan() {
            0.0
        } else {
            self.chaos_chance.clamp(0.0, 1.0)
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            chaos_chance: Self::DEFAULT_CHAOS_CHANCE,
        }
    }
}
