//! Top-level client pairing the show controller with a front-end.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Controller (round rules, director, presenters)
//!   └─→ Frontend (terminal panel or scripted replay)
//! ```
//!
//! The controller is built by `client-bootstrap`; the front-end borrows it
//! for the whole session.

mod builder;

pub use builder::ClientBuilder;
pub use client_bootstrap::Frontend;

use anyhow::Result;
use feud_runtime::Controller;

/// Top-level client container.
pub struct Client {
    controller: Controller,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Hand the controller to the front-end until it returns.
    pub fn run(mut self) -> Result<()> {
        let result = self.frontend.run(&mut self.controller);
        tracing::info!(
            phase = %self.controller.round().phase(),
            played = self.controller.selector().played().len(),
            presenter_failures = self.controller.presenter_failures(),
            "session finished"
        );
        result
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}
