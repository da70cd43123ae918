//! Content loaders for reading show data from files.
//!
//! Prompts come from CSV, the show configuration from TOML and the audio
//! manifest from RON. [`ContentFactory`] ties them to one data directory.

pub mod audio;
pub mod config;
pub mod factory;
pub mod prompts;

pub use audio::AudioManifestLoader;
pub use config::{ConfigLoader, ShowConfig};
pub use factory::ContentFactory;
pub use prompts::PromptLoader;

use std::path::Path;

use crate::error::LoadError;

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, LoadError>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))
}

/// Name used for a source in error messages and prompt list titles.
pub(crate) fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
