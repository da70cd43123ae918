//! Unified error types surfaced by the runtime API.
//!
//! Wraps round failures, asset problems and presenter I/O so clients can
//! bubble them up with consistent context.
use feud_core::{CueId, ErrorSeverity, GameError, RoundError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Round(#[from] RoundError),

    #[error("audio manifest is missing {} cue(s): {}", missing.len(), join_keys(missing))]
    MissingCues { missing: Vec<CueId> },

    #[error("controller requires a prompt store before building")]
    MissingStore,

    #[error("presenter failed to write a command")]
    Presenter(#[source] std::io::Error),

    #[error("failed to encode a presentation command")]
    Encode(#[source] serde_json::Error),
}

impl RuntimeError {
    /// The round failure behind this error, if it came from a producer command.
    pub fn as_round(&self) -> Option<&RoundError> {
        match self {
            Self::Round(err) => Some(err),
            _ => None,
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Round(err) => err.severity(),
            Self::MissingCues { .. } | Self::MissingStore => ErrorSeverity::Fatal,
            Self::Presenter(_) | Self::Encode(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Round(err) => err.error_code(),
            Self::MissingCues { .. } => "MISSING_CUES",
            Self::MissingStore => "MISSING_STORE",
            Self::Presenter(_) => "PRESENTER_IO",
            Self::Encode(_) => "PRESENTER_ENCODE",
        }
    }
}

fn join_keys(cues: &[CueId]) -> String {
    cues.iter().map(|cue| cue.key()).collect::<Vec<_>>().join(", ")
}
