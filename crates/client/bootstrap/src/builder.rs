//! Builds the controller and config bundle used by front-ends.
use anyhow::{Context, Result};
use feud_runtime::{
    Controller, FanoutPresenter, JsonLinesPresenter, Presenter, RuntimeConfig, TracingPresenter,
};

use crate::config::BootstrapConfig;
use crate::content::ShowContent;

/// Builder that assembles content, runtime configuration and presenters
/// for clients.
pub struct RuntimeBuilder {
    config: BootstrapConfig,
    extra_presenters: Vec<Box<dyn Presenter>>,
}

impl RuntimeBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        Self {
            config,
            extra_presenters: Vec::new(),
        }
    }

    /// Also send presentation commands to `presenter`.
    pub fn presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.extra_presenters.push(Box::new(presenter));
        self
    }

    pub fn build(self) -> Result<RuntimeSetup> {
        let data_dir = self.config.resolve_data_dir();
        let content = ShowContent::load(&data_dir)?;
        let runtime_config = self.runtime_config(&content);

        let mut presenters = FanoutPresenter::new().with(TracingPresenter);
        if let Some(feed) = &self.config.presentation_feed {
            let feed_presenter = JsonLinesPresenter::open(feed).with_context(|| {
                format!("failed to open presentation feed {}", feed.display())
            })?;
            tracing::info!(feed = %feed.display(), "writing presentation feed");
            presenters.push(Box::new(feed_presenter));
        }
        for presenter in self.extra_presenters {
            presenters.push(presenter);
        }

        let mut builder = Controller::builder()
            .config(runtime_config)
            .store(content.store.clone())
            .presenter(presenters);
        if let Some(manifest) = &content.manifest {
            builder = builder.manifest(manifest.clone());
        }
        let controller = builder.build().context("failed to build show controller")?;

        Ok(RuntimeSetup {
            config: self.config,
            content,
            controller,
        })
    }

    fn runtime_config(&self, content: &ShowContent) -> RuntimeConfig {
        let mut config = RuntimeConfig {
            game: content.config.game.clone(),
            presentation: content.config.presentation.clone(),
            seed: self.config.seed,
            ..RuntimeConfig::default()
        };
        if let Some(chance) = self.config.chaos_chance {
            config.presentation.chaos_chance = chance;
        }
        if let Some(auto_reset) = self.config.auto_reset {
            config.auto_reset_after_end = auto_reset;
        }
        config
    }
}

pub struct RuntimeSetup {
    pub config: BootstrapConfig,
    pub content: ShowContent,
    pub controller: Controller,
}
