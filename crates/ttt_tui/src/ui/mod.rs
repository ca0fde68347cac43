//! Terminal rendering.

mod board;
mod welcome;

use crate::app::{App, Screen};
use crate::config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Ordinary text.
    pub text: Color,
    /// Hints and empty squares.
    pub muted: Color,
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Background of the winning line.
    pub win: Color,
    /// Background of the cursor square.
    pub cursor: Color,
}

impl Palette {
    /// Returns the palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                x: Color::Blue,
                o: Color::Red,
                win: Color::LightGreen,
                cursor: Color::LightYellow,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                x: Color::LightBlue,
                o: Color::LightRed,
                win: Color::Green,
                cursor: Color::DarkGray,
            },
        }
    }
}

/// Draws the whole UI.
pub fn draw(f: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let help = match app.screen() {
        Screen::Welcome => {
            welcome::render_welcome(f, chunks[1], app, &palette);
            "↑/↓ select  ←/→ change  Enter start  t theme  q quit"
        }
        Screen::Playing => {
            board::render_board(f, chunks[1], app, &palette);
            let status = Paragraph::new(app.status_message())
                .style(Style::default().fg(palette.text))
                .alignment(Alignment::Center);
            f.render_widget(status, chunks[2]);
            "1-9 or arrows+Enter play  r restart  m menu  t theme  q quit"
        }
    };

    let help = Paragraph::new(help)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(
    area: ratatui::layout::Rect,
    width: u16,
    height: u16,
) -> ratatui::layout::Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
