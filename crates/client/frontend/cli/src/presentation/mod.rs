//! Terminal presentation components used by the control panel.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
