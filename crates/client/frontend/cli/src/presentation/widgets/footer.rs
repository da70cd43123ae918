//! Footer widget displaying key bindings for the current phase.

use feud_core::RoundPhase;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, phase: RoundPhase) {
    let bindings: &[(&str, &str)] = match phase {
        RoundPhase::InRound => &[
            ("1-4", "answer"),
            ("w/u", "strike"),
            ("F1-F12", "strike n"),
            ("f/v", "red +/-"),
            ("h/b", "blue +/-"),
            ("Enter/r", "pick"),
            ("n", "next"),
            ("e", "end"),
            ("q", "quit"),
        ],
        RoundPhase::NotStarted | RoundPhase::Ended => &[
            ("j/k", "move"),
            ("Enter", "pick"),
            ("r", "random"),
            ("s", "start"),
            ("i", "intro"),
            ("x", "reset"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::with_capacity(bindings.len() * 3);
    for (i, (key, label)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(format!("[{key}]"), Theme::key()));
        spans.push(Span::raw(format!(" {label}")));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
