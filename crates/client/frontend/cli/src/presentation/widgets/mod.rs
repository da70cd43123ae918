//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads controller state and renders
//! to a terminal frame.

pub mod board;
pub mod feed;
pub mod footer;
pub mod header;
pub mod messages;
pub mod prompts;
