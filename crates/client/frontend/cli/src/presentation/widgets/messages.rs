//! Messages widget displaying recent producer actions and errors.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::message::MessageLog;
use crate::presentation::theme::Theme;

/// Render the message log panel.
///
/// Displays recent messages in bottom-to-top order (newest at bottom).
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let visible = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| ListItem::new(entry.text.clone()).style(Theme::message(entry.level)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Messages "))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}
