//! Board widget: the active prompt, its answers, strikes and scores.

use feud_core::{PromptStore, RoundState, Team};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, store: &PromptStore, round: &RoundState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    let prompt = round.active_prompt().and_then(|id| store.get_by_id(id));
    let mut lines = Vec::new();
    match prompt {
        Some(prompt) => {
            lines.push(Line::from(Span::styled(
                prompt.text().to_owned(),
                Theme::revealed(),
            )));
            lines.push(Line::raw(""));
            for (index, answer) in prompt.answers().iter().enumerate() {
                let shown = round.answer_revealed()[index];
                let (marker, style) = if shown {
                    ("*", Theme::revealed())
                } else {
                    (" ", Theme::hidden())
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{marker} {}. ", index + 1), Theme::key()),
                    Span::styled(answer.clone(), style),
                ]));
            }
        }
        None => lines.push(Line::styled("No prompt on the board", Theme::dim())),
    }

    lines.push(Line::raw(""));
    let strikes: Vec<Span> = round
        .strike_revealed()
        .iter()
        .map(|shown| Span::styled(" X ", Theme::strike(*shown)))
        .collect();
    lines.push(Line::from(strikes));

    let title = match round.active_prompt() {
        Some(id) => format!(" Board #{id} "),
        None => " Board ".to_owned(),
    };
    let board = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(board, chunks[0]);

    let scores = Paragraph::new(Line::from(vec![
        Span::styled(format!("RED {}", round.score(Team::Red)), Theme::team(Team::Red)),
        Span::raw("   "),
        Span::styled(format!("BLUE {}", round.score(Team::Blue)), Theme::team(Team::Blue)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Scores "));
    frame.render_widget(scores, chunks[1]);
}
