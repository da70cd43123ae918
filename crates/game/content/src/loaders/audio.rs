//! Audio manifest loader.
//!
//! ```ron
//! (
//!     assets: [
//!         (file: "Buzzer.wav"),
//!         (name: "GameIntro", file: "theme/intro.ogg", volume: 0.8),
//!     ],
//! )
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::loaders::{LoadResult, read_file};
use crate::manifest::{AudioManifest, CueAsset};

/// Audio manifest structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioCatalog {
    pub assets: Vec<CueAsset>,
}

/// Loader for the audio manifest from RON files.
pub struct AudioManifestLoader;

impl AudioManifestLoader {
    pub fn load(path: &Path) -> LoadResult<AudioManifest> {
        let content = read_file(path)?;
        let catalog: AudioCatalog = ron::from_str(&content).map_err(|source| LoadError::Ron {
            path: path.to_path_buf(),
            source,
        })?;
        Self::build(catalog)
    }

    /// Fills in default names, validates volumes and refuses repeated names.
    pub fn build(catalog: AudioCatalog) -> LoadResult<AudioManifest> {
        let mut assets = Vec::with_capacity(catalog.assets.len());
        let mut seen = BTreeSet::new();
        for mut asset in catalog.assets {
            if asset.name.is_empty() {
                asset.name = Path::new(&asset.file)
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
            }
            if !(0.0..=CueAsset::MAX_VOLUME).contains(&asset.volume) {
                return Err(LoadError::InvalidVolume {
                    name: asset.name,
                    volume: asset.volume,
                });
            }
            if !seen.insert(asset.name.clone()) {
                return Err(LoadError::DuplicateAsset { name: asset.name });
            }
            assets.push(asset);
        }
        Ok(AudioManifest::new(assets))
    }
}
