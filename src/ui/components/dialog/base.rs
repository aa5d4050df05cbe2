//! Centered modal dialog

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const PADDING: u16 = 4;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: String,
    pub accent: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint line shown at the bottom
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Area of a dialog of the given size centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let max_line_width = usize::from(config.max_width.saturating_sub(PADDING).max(1));
    let wrapped_lines = wrap_text(config.message, max_line_width);

    let (width, height) = dialog_size(
        &config.title,
        &wrapped_lines,
        config.hint.is_some(),
        config.max_width,
    );

    let dialog_area = centered(frame.area(), width, height);
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped_lines.into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint));
    }

    let dialog = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(config.accent))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(dialog, dialog_area);
}

/// Outer width and height of a dialog, saturating at `u16::MAX`
fn dialog_size(title: &str, lines: &[String], has_hint: bool, max_width: u16) -> (u16, u16) {
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count());
    let content_width = u16::try_from(content_width).unwrap_or(u16::MAX);
    let width = content_width
        .saturating_add(PADDING + 2)
        .min(max_width);

    // title + blank + message + (blank + hint) + borders
    let hint_lines = if has_hint { 2 } else { 0 };
    let message_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let height = message_lines
        .saturating_add(2 + hint_lines + 2)
        .max(5);

    (width, height)
}

/// Greedy word wrap on char counts
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("login failed: backend unreachable", 14),
            vec!["login failed:", "backend", "unreachable"]
        );
    }

    #[test]
    fn test_wrap_keeps_blank_paragraphs() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered(area, 20, 20), area);
        assert_eq!(centered(Rect::new(0, 0, 20, 10), 10, 4), Rect::new(5, 3, 10, 4));
    }

    #[test]
    fn test_dialog_size_fits_content() {
        let lines = vec!["backend unreachable".to_string()];
        assert_eq!(dialog_size("Error", &lines, true, 60), (25, 7));
        assert_eq!(dialog_size("Error", &lines, false, 10), (10, 5));
    }

    #[test]
    fn test_dialog_size_saturates() {
        let lines = vec![String::new(); 70_000];
        let title = "x".repeat(70_000);
        assert_eq!(dialog_size(&title, &lines, true, 60), (60, u16::MAX));
    }

    #[test]
    fn test_render_oversized_message() {
        let message = "line\n".repeat(70_000);
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|frame| {
                render_dialog(
                    frame,
                    DialogConfig {
                        title: "Error".to_string(),
                        accent: Color::Red,
                        message: &message,
                        hint: None,
                        max_width: 60,
                    },
                )
            })
            .unwrap();
        // 11 wide, clamped to the full 12 rows
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(14, 0)].symbol(), "┌");
        assert_eq!(buffer[(24, 11)].symbol(), "┘");
    }
}
