//! Composes every widget into one control panel frame.
use anyhow::Result;
use feud_core::{GameState, PromptStore};
use ratatui::layout::{Constraint, Direction, Layout};

use crate::presentation::{terminal::Tui, widgets};
use crate::state::PanelState;

/// Everything a frame needs, borrowed from the controller and panel.
pub struct RenderContext<'a> {
    pub store: &'a PromptStore,
    pub game: &'a GameState,
    pub panel: &'a PanelState,
    pub seed: u64,
    pub chaos_chance: f32,
    pub message_panel_height: u16,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(10),                          // Prompts | Board | Feed
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(3),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, rows[0], ctx);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(40),
                Constraint::Percentage(25),
            ])
            .split(rows[1]);

        widgets::prompts::render(frame, columns[0], ctx.store, ctx.game, ctx.panel.cursor);
        widgets::board::render(frame, columns[1], ctx.store, &ctx.game.round);
        widgets::feed::render(frame, columns[2], &ctx.panel.feed);
        widgets::messages::render(frame, rows[2], &ctx.panel.messages);
        widgets::footer::render(frame, rows[3], ctx.game.round.phase());
    })?;

    Ok(())
}
