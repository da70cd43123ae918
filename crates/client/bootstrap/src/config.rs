//! Client bootstrap configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Process-level settings that override `show.toml`.
///
/// Everything is optional; unset fields leave the content configuration as
/// it is.
#[derive(Clone, Debug, Default)]
pub struct BootstrapConfig {
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub chaos_chance: Option<f32>,
    pub auto_reset: Option<bool>,
    /// JSON-lines file the player display reads commands from.
    pub presentation_feed: Option<PathBuf>,
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Directory holding `show.toml`, `audio.ron` and `prompts/`
    /// - `FEUD_SEED` - Fixed seed for prompt draws and chaos cues (default: random)
    /// - `FEUD_CHAOS_CHANCE` - Chaos cue chance in `[0, 1]` (default: from show.toml)
    /// - `FEUD_AUTO_RESET` - Start a new session when a game ends (default: true)
    /// - `FEUD_PRESENTATION_FEED` - Append presentation commands to this file
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("CONTENT_DATA_DIR").ok().map(PathBuf::from),
            seed: read_env::<u64>("FEUD_SEED"),
            chaos_chance: read_env::<f32>("FEUD_CHAOS_CHANCE"),
            auto_reset: read_env_bool("FEUD_AUTO_RESET"),
            presentation_feed: env::var("FEUD_PRESENTATION_FEED")
                .ok()
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Resolves the content directory.
    ///
    /// Tries, in order:
    /// 1. The configured `data_dir` (`CONTENT_DATA_DIR` or `--data-dir`)
    /// 2. Relative to the current executable (../../crates/game/content/data)
    /// 3. Relative to the current directory (crates/game/content/data)
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }

        let bundled = PathBuf::from("crates/game/content/data");
        let from_exe = env::current_exe().ok().and_then(|exe| {
            exe.parent()
                .and_then(|p| p.parent())
                .and_then(|p| p.parent())
                .map(|root| root.join(&bundled))
        });
        match from_exe {
            Some(dir) if dir.exists() => dir,
            _ => env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(bundled),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    env::var(key).ok().map(|value| parse_bool(&value))
}

pub(crate) fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
