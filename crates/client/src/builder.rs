//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use feud_runtime::Controller;

/// Builder for constructing a [`Client`]. Both parts are required.
#[derive(Default)]
pub struct ClientBuilder {
    controller: Option<Controller>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the controller (required).
    ///
    /// Usually built via `RuntimeBuilder` from the `client-bootstrap` crate.
    pub fn controller(mut self, controller: Controller) -> Self {
        self.controller = Some(controller);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// # Errors
    ///
    /// Returns an error if the controller or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let controller = self
            .controller
            .context("Controller is required. Use .controller() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            controller,
            frontend,
        })
    }
}
