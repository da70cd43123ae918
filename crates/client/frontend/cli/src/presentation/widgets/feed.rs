//! Feed widget listing the latest commands sent to the player display.

use std::collections::VecDeque;

use feud_core::PresentationCommand;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::state::describe_command;

pub fn render(frame: &mut Frame, area: Rect, feed: &VecDeque<PresentationCommand>) {
    let items: Vec<ListItem> = feed
        .iter()
        .rev()
        .map(|command| ListItem::new(describe_command(command)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Display "))
        .direction(ListDirection::BottomToTop);
    frame.render_widget(list, area);
}
