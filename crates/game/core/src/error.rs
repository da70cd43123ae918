//! Common error infrastructure for feud-core.
//!
//! Every failure a producer command can hit is a [`RoundError`]. Commands
//! never partially apply: when one of these is returned, the prompt pool,
//! the selection and the round state are exactly what they were before.
//!
//! # Design Principles
//!
//! - **Type Safety**: each failure mode is its own variant with the offending value
//! - **Severity Classification**: errors are categorized for operator-facing handling
//! - **No Retry**: nothing here is transient, so callers surface errors instead of retrying

use crate::prompt::PromptId;
use crate::round::RoundPhase;

/// Severity level of an error, used for categorization and operator feedback.
///
/// - **Validation**: the caller passed an identifier or index outside its domain
/// - **Workflow**: a precondition of the producer workflow is not met yet
/// - **Internal**: a command was issued in a state that should have prevented it
/// - **Fatal**: the show cannot start (content or assets unusable)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not be repeated without changes.
    ///
    /// Examples: unknown prompt id, answer index 7
    Validation,

    /// Workflow precondition violated.
    ///
    /// Examples: start pressed before a prompt was selected, pool exhausted
    Workflow,

    /// Command issued from the wrong phase.
    ///
    /// Frontends are expected to disable such controls, so these indicate
    /// a frontend bug.
    Internal,

    /// Startup cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Workflow => "workflow",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug rather than operator input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all show errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to act, not by impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Which reveal row an index addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RevealKind {
    Answer,
    Strike,
}

/// Errors surfaced by the prompt selector and the round state machine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("prompt {0} does not exist")]
    InvalidId(PromptId),

    #[error("{kind} index {index} out of range (0..{len})")]
    IndexOutOfRange {
        kind: RevealKind,
        index: usize,
        len: usize,
    },

    #[error("no unplayed prompts remain")]
    NoPromptsAvailable,

    #[error("no prompt is selected")]
    NoPendingPrompt,

    #[error("prompt {0} was already played this session")]
    PromptAlreadyPlayed(PromptId),

    #[error("prompt {0} is not the freshly committed prompt")]
    PromptNotCommitted(PromptId),

    #[error("cannot {command} while {phase}")]
    InvalidStateTransition {
        command: &'static str,
        phase: RoundPhase,
    },
}

impl RoundError {
    pub(crate) const fn transition(command: &'static str, phase: RoundPhase) -> Self {
        Self::InvalidStateTransition { command, phase }
    }
}

impl GameError for RoundError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidId(_) | Self::IndexOutOfRange { .. } => ErrorSeverity::Validation,
            Self::NoPromptsAvailable
            | Self::NoPendingPrompt
            | Self::PromptAlreadyPlayed(_)
            | Self::PromptNotCommitted(_) => ErrorSeverity::Workflow,
            Self::InvalidStateTransition { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidId(_) => "INVALID_ID",
            Self::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            Self::NoPromptsAvailable => "NO_PROMPTS_AVAILABLE",
            Self::NoPendingPrompt => "NO_PENDING_PROMPT",
            Self::PromptAlreadyPlayed(_) => "PROMPT_ALREADY_PLAYED",
            Self::PromptNotCommitted(_) => "PROMPT_NOT_COMMITTED",
            Self::InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
        }
    }
}
