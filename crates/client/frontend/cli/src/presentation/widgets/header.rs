//! Header widget: phase, round, pool size, seed and chaos chance.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{theme::Theme, ui::RenderContext};

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let round = &ctx.game.round;
    let selector = &ctx.game.selector;

    let mut spans = vec![
        Span::styled(round.phase().to_string().to_uppercase(), Theme::phase(round.phase())),
        Span::raw(" | "),
        Span::raw(format!("Round {}", round.round_number())),
        Span::raw(" | "),
        Span::raw(format!(
            "Pool {}/{}",
            selector.remaining().len(),
            ctx.store.len()
        )),
    ];
    if let Some(pending) = selector.pending() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(format!("Next #{pending}"), Theme::pending()));
    }
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(format!("seed {}", ctx.seed), Theme::dim()));
    if ctx.chaos_chance > 0.0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("chaos {:.0}%", ctx.chaos_chance * 100.0),
            Theme::key(),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Feud "));
    frame.render_widget(paragraph, area);
}
