//! Commands the show sends to the player-facing display.
//!
//! The display owns all timing and animation. These commands are
//! fire-and-forget: nothing is acknowledged and the round state never waits
//! on them.
use crate::prompt::{Answers, PromptId};

/// Every sound cue the show can ask for.
///
/// The string form is the asset key the audio manifest must provide.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CueId {
    // Theme music
    #[strum(serialize = "GameIntro")]
    #[cfg_attr(feature = "serde", serde(rename = "GameIntro"))]
    ThemeWithIntro,
    #[strum(serialize = "GameIntroNoBeginSting")]
    #[cfg_attr(feature = "serde", serde(rename = "GameIntroNoBeginSting"))]
    ThemeNoIntro,
    #[strum(serialize = "FamilyFeud")]
    #[cfg_attr(feature = "serde", serde(rename = "FamilyFeud"))]
    AltTheme,

    // Correct answers
    CorrectAnswer,
    NiceShot,
    CashRegister,
    MarioCoin,
    TacoBell,
    HellYeah,
    LetsaGo,
    Nice,
    OwenWilson,
    ZeldaChest,
    DaBest,

    // Incorrect answers
    #[strum(serialize = "Buzzer")]
    #[cfg_attr(feature = "serde", serde(rename = "Buzzer"))]
    IncorrectAnswer,
    Bonk,
    #[strum(serialize = "CrowdAwww")]
    #[cfg_attr(feature = "serde", serde(rename = "CrowdAwww"))]
    CrowdAww,
    Fail,
    SadTrombone,
    Wilhelm,
    WindowsError,
    Fart,
    MarioFall,
    Oof,
    Moo,
    TromboneDown,
    MarshallHurt,

    // Transitions
    Whoosh1,
    Whoosh2,
    Whoosh3,
    Whoosh4,

    // Misc
    BaseBump,
    Bling,
    Click,
}

/// Coarse grouping of cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CueGroup {
    Theme,
    CorrectAnswer,
    IncorrectAnswer,
    Transition,
    Misc,
}

impl CueId {
    /// Cues eligible for chaos substitution on a revealed answer.
    pub const CORRECT_ANSWER: [CueId; 11] = [
        CueId::CorrectAnswer,
        CueId::NiceShot,
        CueId::CashRegister,
        CueId::MarioCoin,
        CueId::TacoBell,
        CueId::HellYeah,
        CueId::LetsaGo,
        CueId::Nice,
        CueId::OwenWilson,
        CueId::ZeldaChest,
        CueId::DaBest,
    ];

    /// Cues eligible for chaos substitution on a revealed strike.
    pub const INCORRECT_ANSWER: [CueId; 13] = [
        CueId::IncorrectAnswer,
        CueId::Bonk,
        CueId::CrowdAww,
        CueId::Fail,
        CueId::SadTrombone,
        CueId::Wilhelm,
        CueId::WindowsError,
        CueId::Fart,
        CueId::MarioFall,
        CueId::Oof,
        CueId::Moo,
        CueId::TromboneDown,
        CueId::MarshallHurt,
    ];

    /// Asset key of this cue.
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn group(self) -> CueGroup {
        match self {
            Self::ThemeWithIntro | Self::ThemeNoIntro | Self::AltTheme => CueGroup::Theme,
            Self::Whoosh1 | Self::Whoosh2 | Self::Whoosh3 | Self::Whoosh4 => CueGroup::Transition,
            Self::BaseBump | Self::Bling | Self::Click => CueGroup::Misc,
            cue if Self::CORRECT_ANSWER.contains(&cue) => CueGroup::CorrectAnswer,
            _ => CueGroup::IncorrectAnswer,
        }
    }
}

/// One instruction for the player display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "command", rename_all = "snake_case"))]
pub enum PresentationCommand {
    /// Show the title card; `with_intro` plays the spinning entrance.
    ShowTitle { with_intro: bool },
    /// Load a prompt into the board with every answer and strike hidden.
    ///
    /// `staged` brings elements in one at a time (first round of a game).
    ShowPrompt {
        prompt: PromptId,
        text: String,
        answers: Answers,
        strike_count: usize,
        staged: bool,
    },
    /// Take the board off screen.
    HidePrompt,
    SetAnswerVisible { index: usize, visible: bool },
    SetStrikeVisible { index: usize, visible: bool },
    /// Start a one-shot cue after `delay_ms`.
    PlayCue { cue: CueId, delay_ms: u32 },
    StopAllCues,
}

impl PresentationCommand {
    pub fn cue(cue: CueId) -> Self {
        Self::PlayCue { cue, delay_ms: 0 }
    }

    pub fn delayed_cue(cue: CueId, delay_ms: u32) -> Self {
        Self::PlayCue { cue, delay_ms }
    }
}
