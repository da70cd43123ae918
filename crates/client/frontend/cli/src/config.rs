//! CLI-specific configuration for the terminal control panel.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from the show configuration loaded by bootstrap.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Directory for log files. `None` uses the platform data directory.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `CLI_MESSAGE_CAPACITY` - Messages kept in the log (default: 200)
    /// - `CLI_TICK_MS` - Input poll interval in milliseconds (default: 250)
    /// - `FEUD_LOG_DIR` - Log file directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.ui.message_capacity = capacity.max(1);
        }
        if let Some(tick) = read_env::<u64>("CLI_TICK_MS") {
            config.ui.tick_rate = Duration::from_millis(tick.clamp(16, 2_000));
        }
        config.log_dir = env::var_os("FEUD_LOG_DIR").map(PathBuf::from);

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    pub message_capacity: usize,
    /// How long the event loop waits for a key before redrawing.
    pub tick_rate: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            message_capacity: 200,
            tick_rate: Duration::from_millis(250),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
