//! Runtime orchestration for the show.
//!
//! This crate wires the pure round rules from `feud-core` to a player
//! display. Consumers build a [`Controller`], feed it producer commands and
//! read its state back for their own screens.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the controller and its builder
//! - [`api`] exposes the error and presenter types clients interact with
//! - [`director`] turns round events into presentation commands
//! - [`presenters`] provides the built-in presenter implementations
//! - [`assets`] checks the audio manifest at startup
pub mod api;
pub mod assets;
pub mod director;
pub mod presenters;
pub mod rng;
pub mod runtime;

pub use api::{Presenter, Result, RuntimeError};
pub use assets::{group_cues, verify_cues};
pub use director::{ChaosDeck, CueBag, Director};
pub use presenters::{FanoutPresenter, JsonLinesPresenter, RecordingPresenter, TracingPresenter};
pub use rng::ShowRng;
pub use runtime::{Controller, ControllerBuilder, DispatchOutcome, RuntimeConfig};
