//! Deterministic show rules and data types shared across clients.
//!
//! `feud-core` defines the prompt store, the round selector and the round
//! state machine, and exposes pure APIs that the runtime and frontends build
//! on. All state mutation flows through [`engine::GameEngine`]; nothing here
//! performs I/O or reads a clock.
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod presentation;
pub mod prompt;
pub mod round;
pub mod selector;

pub use command::{ParseCommandError, ProducerCommand};
pub use config::{GameConfig, PresentationConfig, ReplayPolicy, ScorePolicy};
pub use engine::{GameEngine, GameState};
pub use error::{ErrorSeverity, GameError, RevealKind, RoundError};
pub use event::RoundEvent;
pub use presentation::{CueGroup, CueId, PresentationCommand};
pub use prompt::{Answers, Prompt, PromptDraft, PromptId, PromptList, PromptStore};
pub use round::{RoundPhase, RoundState, Scoreboard, Team};
pub use selector::RoundSelector;
