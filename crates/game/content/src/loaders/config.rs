//! Show configuration loader.
//!
//! ```toml
//! [game]
//! strike_count = 3
//! score_policy = "reset_on_start"
//! replay_policy = "forbid"
//!
//! [presentation]
//! chaos_chance = 0.25
//! ```

use std::path::Path;

use feud_core::{GameConfig, PresentationConfig};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::loaders::{LoadResult, read_file};

/// Everything `show.toml` can set. Every field has a default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowConfig {
    pub game: GameConfig,
    pub presentation: PresentationConfig,
}

/// Loader for show configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ShowConfig> {
        let content = read_file(path)?;
        Self::parse(path, &content)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<ShowConfig> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no show config found, using defaults");
            return Ok(ShowConfig::default());
        }
        Self::load(path)
    }

    fn parse(path: &Path, content: &str) -> LoadResult<ShowConfig> {
        let config: ShowConfig = toml::from_str(content).map_err(|source| LoadError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        Self::validate(path, &config)?;
        Ok(config)
    }

    /// Out-of-range values are refused rather than clamped, so the board
    /// never differs from what the file asks for.
    fn validate(path: &Path, config: &ShowConfig) -> LoadResult<()> {
        let strike_count = config.game.strike_count;
        if !(1..=GameConfig::MAX_STRIKE_COUNT).contains(&strike_count) {
            return Err(LoadError::InvalidStrikeCount {
                path: path.to_path_buf(),
                strike_count,
                max: GameConfig::MAX_STRIKE_COUNT,
            });
        }

        let chance = config.presentation.chaos_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(LoadError::InvalidChaosChance {
                path: path.to_path_buf(),
                chance,
            });
        }
        Ok(())
    }
}
