//! Login screen rendering

use super::field_renderer::{draw_field, draw_help_text, field_height};
use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Focus, FormRow};
use crate::ui::components::{render_primary_button, ButtonState, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows used by a section header line
const HEADER_HEIGHT: u16 = 1;
/// Maximum width of the form column
const FORM_WIDTH: u16 = 64;

/// Height a row needs on screen
fn row_height(row: &FormRow) -> u16 {
    match row {
        FormRow::SectionHeader { .. } => HEADER_HEIGHT,
        FormRow::Field(field) => field_height(field),
    }
}

/// Draw the login screen: title, grouped fields, button and help text
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let rows = app.form.rows();
    let group_height = rows
        .iter()
        .map(row_height)
        .fold(2u16, u16::saturating_add);

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Max(FORM_WIDTH)])
        .flex(ratatui::layout::Flex::Center)
        .split(area)[0];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Title
            Constraint::Length(group_height),  // Field group
            Constraint::Length(1),             // Spacing
            Constraint::Length(BUTTON_HEIGHT), // Log In
            Constraint::Min(0),                // remaining space
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(column);

    let title = Paragraph::new(Line::from(Span::styled(
        "Login",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    draw_group(frame, chunks[1], &rows, app);

    let button_state = if app.state.submitting {
        ButtonState::Busy
    } else if app.state.is_submit_focused() {
        ButtonState::Focused
    } else {
        ButtonState::Idle
    };
    render_primary_button(frame, chunks[3], "Log In", button_state);

    draw_help_text(
        frame,
        chunks[5],
        &format!("Tab:next  {REVEAL_SHORTCUT}:show/hide  {SUBMIT_SHORTCUT}:log in  Esc:quit"),
    );
}

/// Draw the inset group holding every section
fn draw_group(frame: &mut Frame, area: Rect, rows: &[FormRow], app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = rows
        .iter()
        .map(|row| Constraint::Length(row_height(row)))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (row, slot) in rows.iter().zip(slots.iter()) {
        match row {
            FormRow::SectionHeader { title } => {
                let header = Paragraph::new(Span::styled(
                    title.to_uppercase(),
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                ));
                frame.render_widget(header, *slot);
            }
            FormRow::Field(field) => {
                let is_active = app.state.focus() == Focus::Field(field.id);
                draw_field(frame, *slot, field, is_active, app.mask_char);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| draw_login(frame, frame.area(), app))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(80)
            .map(|cells| cells.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_login_screen_layout() {
        let app = App::new(&TuiConfig::default()).unwrap();
        let screen = screen(&app);
        assert!(screen.contains("Login"));
        assert!(screen.contains("LOGIN"));
        assert!(screen.contains("EMAIL"));
        assert!(screen.contains("Username"));
        assert!(screen.contains("PASSWORD"));
        assert!(screen.contains("Log In"));
    }

    #[test]
    fn test_rules_hidden_before_input() {
        let app = App::new(&TuiConfig::default()).unwrap();
        assert!(!screen(&app).contains("Please enter a valid email"));
    }

    #[test]
    fn test_rules_shown_after_input() {
        let mut app = App::new(&TuiConfig::default()).unwrap();
        let email = app.form.field_ids()[0];
        app.form.set_text(email, "user@").unwrap();
        let screen = screen(&app);
        assert!(screen.contains("user@"));
        assert!(screen.contains("Please enter a valid email"));
    }

    #[test]
    fn test_row_heights() {
        let app = App::new(&TuiConfig::default()).unwrap();
        let heights: Vec<u16> = app.form.rows().iter().map(row_height).collect();
        assert_eq!(heights, vec![1, 3, 3]);
    }
}
