//! Tic-tac-toe board rendering.

use super::{Palette, center_rect};
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};
use ttt_engine::{Mark, Position, Square, WinLine};

/// Renders the board with cursor and winning line.
pub fn render_board(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let ctx = SquareContext {
        app,
        palette,
        winning_line: app.session().winning_line(),
    };

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        render_row(f, area, &ctx, row * 3);
    }
    render_separator(f, rows[1], palette);
    render_separator(f, rows[3], palette);
}

struct SquareContext<'a> {
    app: &'a App,
    palette: &'a Palette,
    winning_line: Option<WinLine>,
}

fn render_row(f: &mut Frame, area: Rect, ctx: &SquareContext<'_>, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], ctx, start);
    render_vertical_sep(f, cols[1], ctx.palette);
    render_square(f, cols[2], ctx, start + 1);
    render_vertical_sep(f, cols[3], ctx.palette);
    render_square(f, cols[4], ctx, start + 2);
}

fn render_square(f: &mut Frame, area: Rect, ctx: &SquareContext<'_>, index: usize) {
    let palette = ctx.palette;
    let square = ctx.app.session().board().get(index).unwrap_or_default();
    let (text, mut style) = match square {
        Square::Empty => (format!("{}", index + 1), Style::default().fg(palette.muted)),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    };

    if ctx.winning_line.is_some_and(|line| line.contains(index)) {
        style = style.bg(palette.win);
    } else if Position::from_index(index) == Some(ctx.app.cursor()) {
        style = style.bg(palette.cursor);
    }

    // Pad to the middle line of the 3-row cell.
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(palette.muted));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}
