//! Loads everything a show needs from its data directory.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use feud_content::{AudioManifest, ContentFactory, ShowConfig};
use feud_core::PromptStore;

/// Content for one show, loaded once at startup.
#[derive(Clone, Debug)]
pub struct ShowContent {
    pub data_dir: PathBuf,
    pub config: ShowConfig,
    pub store: PromptStore,
    /// `None` when the data directory has no `audio.ron`.
    pub manifest: Option<AudioManifest>,
}

impl ShowContent {
    pub fn load(data_dir: &Path) -> Result<Self> {
        if !data_dir.is_dir() {
            anyhow::bail!(
                "content data directory not found: {} (set CONTENT_DATA_DIR or pass --data-dir)",
                data_dir.display()
            );
        }
        let factory = ContentFactory::new(data_dir);

        let config = factory
            .load_config()
            .with_context(|| format!("failed to load show.toml from {}", data_dir.display()))?;

        let store = factory
            .load_prompt_store()
            .with_context(|| format!("failed to load prompts from {}", data_dir.display()))?;

        let manifest = if data_dir.join("audio.ron").exists() {
            Some(factory.load_audio_manifest().with_context(|| {
                format!("failed to load audio.ron from {}", data_dir.display())
            })?)
        } else {
            tracing::warn!(
                data_dir = %data_dir.display(),
                "no audio.ron found, skipping cue verification"
            );
            None
        };

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            config,
            store,
            manifest,
        })
    }
}
