//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_login(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything (modal)
    if let Some(error) = app.state.current_error() {
        let queued = app.state.error_queue.len().saturating_sub(1);
        components::render_error_dialog(frame, error, queued);
    }
}
