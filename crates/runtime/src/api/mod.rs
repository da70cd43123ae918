//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the controller, director and presenters can stay focused on their own job.

pub mod errors;
pub mod presenter;

pub use errors::{Result, RuntimeError};
pub use presenter::Presenter;
