//! Prompt list widget.
//!
//! Rows follow store order. Played prompts are struck through, the active
//! prompt is green, the pending choice is yellow and the cursor row is
//! reversed.

use feud_core::{GameState, PromptStore};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, store: &PromptStore, game: &GameState, cursor: usize) {
    let selector = &game.selector;
    let items: Vec<ListItem> = store
        .iter()
        .enumerate()
        .map(|(row, prompt)| {
            let id = prompt.id();
            let mut style = if selector.active() == Some(id) {
                Theme::active()
            } else if selector.pending() == Some(id) {
                Theme::pending()
            } else if selector.is_played(id) {
                Theme::played()
            } else {
                Style::default()
            };
            if row == cursor {
                style = Theme::cursor(style);
            }

            let list = store
                .list_of(id)
                .map(|list| list.name())
                .unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(format!("{id:>3} "), Theme::dim()),
                Span::styled(prompt.text().to_owned(), style),
                Span::styled(format!("  [{list}]"), Theme::dim()),
            ]))
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(cursor));
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Prompts ({}) ", store.len())),
    );
    frame.render_stateful_widget(list, area, &mut list_state);
}
