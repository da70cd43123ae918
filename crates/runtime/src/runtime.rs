//! The show controller.
//!
//! [`Controller`] is the single owner of the prompt store, the game state,
//! the director and the presenter. Every producer command enters through
//! [`Controller::dispatch`] and is fully handled, presentation included,
//! before the call returns.

use feud_content::AudioManifest;
use feud_core::{
    GameConfig, GameEngine, GameState, PresentationCommand, PresentationConfig, ProducerCommand,
    PromptStore, RoundEvent, RoundSelector, RoundState,
};

use crate::api::{Presenter, Result, RuntimeError};
use crate::assets::verify_cues;
use crate::director::Director;
use crate::presenters::TracingPresenter;
use crate::rng::ShowRng;

/// Runtime configuration shared by the controller and the director.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub presentation: PresentationConfig,
    /// Start a fresh session as soon as a game ends, so the next game can
    /// be set up right away.
    pub auto_reset_after_end: bool,
    /// Fixed seed for prompt draws and chaos cues. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            presentation: PresentationConfig::default(),
            auto_reset_after_end: true,
            seed: None,
        }
    }
}

/// Everything one producer command caused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatchOutcome {
    pub events: Vec<RoundEvent>,
    pub commands: Vec<PresentationCommand>,
}

pub struct Controller {
    config: RuntimeConfig,
    store: PromptStore,
    state: GameState,
    director: Director,
    presenter: Box<dyn Presenter>,
    selection_rng: ShowRng,
    chaos_rng: ShowRng,
    seed: u64,
    presenter_failures: u64,
}

impl Controller {
    /// Create a new controller builder
    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::new()
    }

    /// Applies one producer command.
    ///
    /// On `Err` nothing changed. Presenter failures do not fail the command;
    /// they are logged and counted.
    pub fn dispatch(&mut self, command: &ProducerCommand) -> Result<DispatchOutcome> {
        let mut engine = GameEngine::new(&mut self.state, &self.config.game);
        let mut events = match engine.execute(command, &mut self.selection_rng) {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(%command, error = %err, "producer command rejected");
                return Err(RuntimeError::Round(err));
            }
        };

        if self.config.auto_reset_after_end
            && events
                .iter()
                .any(|event| matches!(event, RoundEvent::GameEnded { .. }))
        {
            events.push(engine.reset());
        }

        for event in &events {
            self.log_event(event);
        }

        let mut commands = Vec::new();
        for event in &events {
            commands.extend(
                self.director
                    .direct(event, &self.store, &mut self.chaos_rng),
            );
        }
        self.present(&commands);

        Ok(DispatchOutcome { events, commands })
    }

    fn log_event(&self, event: &RoundEvent) {
        match event {
            RoundEvent::PromptSelected { prompt, random } => {
                tracing::info!(prompt = prompt.0, random, "prompt selected");
            }
            RoundEvent::PromptCommitted { prompt } => {
                tracing::info!(
                    prompt = prompt.0,
                    remaining = self.state.selector.remaining().len(),
                    "prompt committed"
                );
            }
            RoundEvent::GameStarted { prompt } => {
                tracing::info!(prompt = prompt.0, "game started");
            }
            RoundEvent::RoundAdvanced { prompt, round } => {
                tracing::info!(prompt = prompt.0, round, "round advanced");
            }
            RoundEvent::GameEnded { final_scores } => {
                tracing::info!(red = final_scores.red, blue = final_scores.blue, "game ended");
            }
            RoundEvent::SessionReset => tracing::info!("session reset"),
            other => tracing::debug!(event = other.label(), ?other, "round event"),
        }
    }

    fn present(&mut self, commands: &[PresentationCommand]) {
        for command in commands {
            if let Err(err) = self.presenter.present(command) {
                tracing::warn!(error = %err, ?command, "presenter failed");
                self.presenter_failures += 1;
            }
        }
        if let Err(err) = self.presenter.flush() {
            tracing::warn!(error = %err, "presenter flush failed");
            self.presenter_failures += 1;
        }
    }

    // ===== read access for frontends =====

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn store(&self) -> &PromptStore {
        &self.store
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn round(&self) -> &RoundState {
        &self.state.round
    }

    pub fn selector(&self) -> &RoundSelector {
        &self.state.selector
    }

    pub fn director(&self) -> &Director {
        &self.director
    }

    /// Seed this session's randomness was derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn presenter_failures(&self) -> u64 {
        self.presenter_failures
    }
}

/// Builder for [`Controller`].
pub struct ControllerBuilder {
    config: RuntimeConfig,
    store: Option<PromptStore>,
    presenter: Option<Box<dyn Presenter>>,
    manifest: Option<AudioManifest>,
}

impl ControllerBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            store: None,
            presenter: None,
            manifest: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required prompt store
    pub fn store(mut self, store: PromptStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the presenter (defaults to [`TracingPresenter`])
    pub fn presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenter = Some(Box::new(presenter));
        self
    }

    /// Check cues against this manifest when building.
    pub fn manifest(mut self, manifest: AudioManifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn build(self) -> Result<Controller> {
        let store = self.store.ok_or(RuntimeError::MissingStore)?;
        if let Some(manifest) = &self.manifest {
            verify_cues(manifest)?;
        }

        let root = match self.config.seed {
            Some(seed) => ShowRng::new(seed),
            None => ShowRng::from_entropy(),
        };
        let state = GameState::new(&store, &self.config.game);
        let director = Director::new(&self.config.game, &self.config.presentation);

        tracing::info!(
            prompts = store.len(),
            lists = store.lists().len(),
            strike_count = state.round.strike_count(),
            chaos_chance = director.chaos().chance(),
            seed = root.seed(),
            "controller ready"
        );

        Ok(Controller {
            selection_rng: root.for_context("prompts"),
            chaos_rng: root.for_context("chaos"),
            seed: root.seed(),
            config: self.config,
            store,
            state,
            director,
            presenter: self
                .presenter
                .unwrap_or_else(|| Box::new(TracingPresenter)),
            presenter_failures: 0,
        })
    }
}
