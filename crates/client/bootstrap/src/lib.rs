//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, content loading, and controller setup that
//! can be reused by the terminal panel, scripted runs, or other front-ends.
pub mod builder;
pub mod config;
pub mod content;
pub mod frontend;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::BootstrapConfig;
pub use content::ShowContent;
pub use frontend::Frontend;
