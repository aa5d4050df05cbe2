//! Field rendering utilities for forms

use crate::state::FieldRow;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the bordered input box
const INPUT_HEIGHT: u16 = 3;

/// Total rows a field needs: input box plus one line per unmet rule
pub fn field_height(row: &FieldRow) -> u16 {
    let unmet = u16::try_from(row.unmet_rules().count()).unwrap_or(u16::MAX);
    INPUT_HEIGHT.saturating_add(unmet)
}

/// Draw one field row: labelled input box followed by its unmet rules
pub fn draw_field(frame: &mut Frame, area: Rect, row: &FieldRow, is_active: bool, mask: char) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)])
        .split(area);

    draw_input(frame, chunks[0], row, is_active, mask);
    draw_unmet_rules(frame, chunks[1], row);
}

fn draw_input(frame: &mut Frame, area: Rect, row: &FieldRow, is_active: bool, mask: char) {
    let has_errors = row.unmet_rules().next().is_some();
    let border_style = if !row.enabled {
        Style::default().fg(Color::Black)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_errors {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = Vec::new();
    if row.state.text.is_empty() {
        spans.push(Span::styled(
            row.hint.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        let text_style = if row.enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(row.state.display_text(mask), text_style));
    }
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let mut block = Block::default()
        .title(Span::styled(
            format!(" {} ", row.title.to_uppercase()),
            Style::default().fg(Color::Gray),
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    if row.obscurable {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {} ", row.state.visibility.affordance()),
                Style::default().fg(Color::Cyan),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_unmet_rules(frame: &mut Frame, area: Rect, row: &FieldRow) {
    if area.height == 0 {
        return;
    }
    let lines: Vec<Line> = row
        .unmet_rules()
        .map(|rule| {
            Line::from(vec![
                Span::styled("  ✗ ", Style::default().fg(Color::Red)),
                Span::styled(rule.message().to_string(), Style::default().fg(Color::Red)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw help text line at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
