//! Errors raised while loading show content.
//!
//! Content is read once at startup, so every variant here is fatal: the
//! show refuses to start instead of running with partial data.
use std::path::PathBuf;

use feud_core::{ErrorSeverity, GameError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "loaders")]
    #[error("malformed CSV in {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("{source_name} is missing the required column `{column}`")]
    MissingColumn {
        source_name: String,
        column: &'static str,
    },

    #[error("{source_name} row {row}: expected 4 answers, found {found}")]
    WrongAnswerCount {
        source_name: String,
        row: usize,
        found: usize,
    },

    #[error("{source_name} row {row}: prompt text is blank")]
    BlankPrompt { source_name: String, row: usize },

    #[error("{source_name} holds no prompts")]
    EmptySource { source_name: String },

    #[cfg(feature = "loaders")]
    #[error("failed to parse {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[cfg(feature = "loaders")]
    #[error("failed to parse {}: {source}", path.display())]
    Ron {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("audio asset `{name}` has volume {volume}, expected 0.0..=2.0")]
    InvalidVolume { name: String, volume: f32 },

    #[error("audio asset `{name}` is listed more than once")]
    DuplicateAsset { name: String },

    #[error("{}: strike_count {strike_count} is outside 1..={max}", path.display())]
    InvalidStrikeCount {
        path: PathBuf,
        strike_count: usize,
        max: usize,
    },

    #[error("{}: chaos_chance {chance} is outside 0.0..=1.0", path.display())]
    InvalidChaosChance { path: PathBuf, chance: f32 },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl GameError for LoadError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CONTENT_IO",
            #[cfg(feature = "loaders")]
            Self::Csv { .. } => "CONTENT_CSV",
            Self::MissingColumn { .. } => "CONTENT_MISSING_COLUMN",
            Self::WrongAnswerCount { .. } => "CONTENT_WRONG_ANSWER_COUNT",
            Self::BlankPrompt { .. } => "CONTENT_BLANK_PROMPT",
            Self::EmptySource { .. } => "CONTENT_EMPTY_SOURCE",
            #[cfg(feature = "loaders")]
            Self::Toml { .. } => "CONTENT_TOML",
            #[cfg(feature = "loaders")]
            Self::Ron { .. } => "CONTENT_RON",
            Self::InvalidVolume { .. } => "CONTENT_INVALID_VOLUME",
            Self::DuplicateAsset { .. } => "CONTENT_DUPLICATE_ASSET",
            Self::InvalidStrikeCount { .. } => "CONTENT_INVALID_STRIKE_COUNT",
            Self::InvalidChaosChance { .. } => "CONTENT_INVALID_CHAOS_CHANCE",
        }
    }
}
