//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Focused,
    Busy,
}

/// Render a full-width primary action button with centered label
pub fn render_primary_button(frame: &mut Frame, area: Rect, label: &str, state: ButtonState) {
    let accent = Color::Blue;

    let (border_style, text_style) = match state {
        ButtonState::Focused => (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::White)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        ),
        ButtonState::Idle => (
            Style::default().fg(accent),
            Style::default().fg(Color::White).bg(accent),
        ),
        ButtonState::Busy => (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        ),
    };

    let text = match state {
        ButtonState::Busy => format!("{label}…"),
        _ => label.to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(text_style)
        .block(block);

    frame.render_widget(paragraph, area);
}
