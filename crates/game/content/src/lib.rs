//! Data-driven show content and its loaders.
//!
//! This crate reads the files a show is made of:
//! - Prompt lists (CSV, one list per file)
//! - Show configuration (TOML)
//! - Audio manifest (RON)
//!
//! Content is loaded once at startup and handed to the runtime; nothing here
//! is touched again while the show runs.

pub mod error;
pub mod manifest;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use error::LoadError;
pub use manifest::{AudioManifest, CueAsset};

#[cfg(feature = "loaders")]
pub use loaders::{
    AudioManifestLoader, ConfigLoader, ContentFactory, LoadResult, PromptLoader, ShowConfig,
};
