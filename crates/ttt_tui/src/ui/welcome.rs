//! Start screen: pick mode and difficulty.

use super::{Palette, center_rect};
use crate::app::{App, WelcomeField};
use crate::config::GameMode;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the mode and difficulty selectors.
pub fn render_welcome(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let welcome_area = center_rect(area, 40, 8);

    let difficulty = if app.mode() == GameMode::HumanVsAi {
        app.difficulty().to_string()
    } else {
        format!("{} (unused)", app.difficulty())
    };

    let lines = vec![
        Line::from(""),
        selector_line(
            "Mode",
            app.mode().label(),
            app.welcome_field() == WelcomeField::Mode,
            palette,
        ),
        Line::from(""),
        selector_line(
            "Difficulty",
            &difficulty,
            app.welcome_field() == WelcomeField::Difficulty,
            palette,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(palette.muted),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Welcome ")
                .style(Style::default().fg(palette.text)),
        )
        .alignment(Alignment::Center);
    f.render_widget(paragraph, welcome_area);
}

fn selector_line(label: &str, value: &str, selected: bool, palette: &Palette) -> Line<'static> {
    let value_style = if selected {
        Style::default()
            .fg(palette.text)
            .bg(palette.cursor)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };

    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(palette.muted)),
        Span::styled(format!("◀ {} ▶", value), value_style),
    ])
}
