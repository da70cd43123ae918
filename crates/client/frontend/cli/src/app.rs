//! Interactive control panel driving the controller from the keyboard.
use anyhow::Result;
use client_bootstrap::Frontend;
use crossterm::event::{self, Event};
use feud_core::ProducerCommand;
use feud_runtime::{Controller, RuntimeError};

use crate::config::CliConfig;
use crate::input::InputHandler;
use crate::presentation::{
    terminal::{self, Tui},
    ui::{self, RenderContext},
};
use crate::state::{PanelState, Step};

/// Terminal front-end: one synchronous loop that polls keys, dispatches
/// producer commands and redraws.
pub struct CliFrontend {
    config: CliConfig,
    input: InputHandler,
    panel: PanelState,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        let panel = PanelState::new(config.ui.message_capacity);
        Self {
            config,
            input: InputHandler::new(),
            panel,
        }
    }

    fn event_loop(&mut self, terminal: &mut Tui, controller: &mut Controller) -> Result<()> {
        loop {
            self.draw(terminal, controller)?;

            if !event::poll(self.config.ui.tick_rate)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };

            let action = self.input.handle_key(key);
            match self
                .panel
                .apply(action, controller.store(), controller.round())
            {
                Step::Quit => return Ok(()),
                Step::Idle => {}
                Step::Dispatch(command) => self.dispatch(controller, &command),
            }
        }
    }

    fn dispatch(&mut self, controller: &mut Controller, command: &ProducerCommand) {
        tracing::info!(%command, "producer command");
        match controller.dispatch(command) {
            Ok(outcome) => self.panel.record(&outcome, controller.store()),
            Err(RuntimeError::Round(err)) => self.panel.messages.warn(err.to_string()),
            Err(err) => {
                tracing::error!(error = %err, "dispatch failed");
                self.panel.messages.error(err.to_string());
            }
        }
    }

    fn draw(&self, terminal: &mut Tui, controller: &Controller) -> Result<()> {
        let ctx = RenderContext {
            store: controller.store(),
            game: controller.state(),
            panel: &self.panel,
            seed: controller.seed(),
            chaos_chance: controller.director().chaos().chance(),
            message_panel_height: self.config.ui.message_panel_height,
        };
        ui::render(terminal, &ctx)
    }
}

impl Frontend for CliFrontend {
    fn run(&mut self, controller: &mut Controller) -> Result<()> {
        tracing::info!("control panel starting");
        self.panel.messages.info(format!(
            "{} prompts loaded, press i for the intro or Enter to pick",
            controller.store().len()
        ));

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = self.event_loop(&mut terminal, controller);

        terminal::restore()?;
        tracing::info!("control panel exiting");
        result
    }
}
