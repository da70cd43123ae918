//! Colors and emphasis for the control panel.
use feud_core::{RoundPhase, Team};
use ratatui::style::{Color, Modifier, Style};

use crate::message::MessageLevel;

pub struct Theme;

impl Theme {
    pub fn phase(phase: RoundPhase) -> Style {
        let color = match phase {
            RoundPhase::NotStarted => Color::Gray,
            RoundPhase::InRound => Color::Green,
            RoundPhase::Ended => Color::Yellow,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn team(team: Team) -> Style {
        let color = match team {
            Team::Red => Color::LightRed,
            Team::Blue => Color::LightBlue,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn message(level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    pub fn played() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn active() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn pending() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn cursor(style: Style) -> Style {
        style.add_modifier(Modifier::REVERSED)
    }

    pub fn revealed() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn hidden() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn strike(visible: bool) -> Style {
        if visible {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
