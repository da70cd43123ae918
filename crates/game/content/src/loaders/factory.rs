//! Content factory for loading a whole show from a data directory.

use std::path::{Path, PathBuf};

use feud_core::PromptStore;

use crate::error::LoadError;
use crate::loaders::{
    AudioManifestLoader, ConfigLoader, LoadResult, PromptLoader, ShowConfig, source_name,
};
use crate::manifest::AudioManifest;

/// Content factory that loads all show content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── show.toml
/// ├── audio.ron
/// └── prompts/
///     ├── classic.csv
///     └── spicy.csv
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load show configuration from `show.toml`, falling back to defaults.
    pub fn load_config(&self) -> LoadResult<ShowConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("show.toml"))
    }

    /// Load every `prompts/*.csv` file, in file name order, into one store.
    ///
    /// Each file becomes a prompt list named after its stem.
    pub fn load_prompt_store(&self) -> LoadResult<PromptStore> {
        let prompts_dir = self.prompts_dir();
        let entries =
            std::fs::read_dir(&prompts_dir).map_err(|e| LoadError::io(&prompts_dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| LoadError::io(&prompts_dir, e))?.path();
            let is_csv = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if is_csv && path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        if files.is_empty() {
            return Err(LoadError::EmptySource {
                source_name: prompts_dir.display().to_string(),
            });
        }

        let mut store = PromptStore::new();
        for path in files {
            let drafts = PromptLoader::load(&path)?;
            let list = store.push_list(source_name(&path), drafts);
            tracing::info!(list = list.name(), prompts = list.len(), "loaded prompt list");
        }
        Ok(store)
    }

    /// Load the audio manifest from `audio.ron`.
    pub fn load_audio_manifest(&self) -> LoadResult<AudioManifest> {
        AudioManifestLoader::load(&self.data_dir.join("audio.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn prompts_dir(&self) -> PathBuf {
        self.data_dir.join("prompts")
    }
}
