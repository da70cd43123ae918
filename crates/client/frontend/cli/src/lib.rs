//! Terminal producer control panel for the show.
//!
//! Two front-ends implement [`client_bootstrap::Frontend`]:
//! - [`CliFrontend`] is the interactive ratatui panel
//! - [`ScriptFrontend`] replays text commands without a terminal
//!
//! Both own nothing but UI state; the controller is lent to them for the
//! whole session.

mod app;
mod config;
mod input;
pub mod logging;
mod message;
pub mod presentation;
mod script;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use input::{InputHandler, KeyAction};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use script::ScriptFrontend;
pub use state::{PanelState, Step};
