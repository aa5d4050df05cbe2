//! Screen layout and status bar

use crate::app::App;
use crate::state::Status;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

fn status_color(status: &Status) -> Color {
    match status {
        Status::Info(_) => Color::Green,
        Status::Blocked(_) => Color::Red,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " login-form ",
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if app.state.submitting {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Logging in…", Style::default().fg(Color::Yellow)));
    } else if let Some(status) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            status.text(),
            Style::default().fg(status_color(status)),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
