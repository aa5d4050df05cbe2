//! Application state definitions

use super::forms::FieldId;

/// Which element of the login screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    SubmitButton,
}

/// Status bar message, tagged by what produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Informational, e.g. a login outcome
    Info(String),
    /// The user has something to fix, e.g. a blocked or rejected submit
    Blocked(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Blocked(text) => text,
        }
    }
}

/// UI state that lives outside the form model
#[derive(Debug, Clone)]
pub struct AppState {
    /// Focus order: enabled fields in display order, then the submit button
    focus_order: Vec<Focus>,
    focus_index: usize,
    /// Queue of errors waiting to be shown in the error dialog
    pub error_queue: Vec<String>,
    /// Status bar message
    pub status_message: Option<Status>,
    /// Whether a submit is currently awaiting the login handler
    pub submitting: bool,
}

impl AppState {
    pub fn new(focusable_fields: impl IntoIterator<Item = FieldId>) -> Self {
        let mut focus_order: Vec<Focus> = focusable_fields.into_iter().map(Focus::Field).collect();
        focus_order.push(Focus::SubmitButton);
        Self {
            focus_order,
            focus_index: 0,
            error_queue: Vec::new(),
            status_message: None,
            submitting: false,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus_order
            .get(self.focus_index)
            .copied()
            .unwrap_or(Focus::SubmitButton)
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        match self.focus() {
            Focus::Field(id) => Some(id),
            Focus::SubmitButton => None,
        }
    }

    pub fn is_submit_focused(&self) -> bool {
        self.focus() == Focus::SubmitButton
    }

    pub fn next_focus(&mut self) {
        self.focus_index = (self.focus_index + 1) % self.focus_order.len();
    }

    pub fn prev_focus(&mut self) {
        if self.focus_index == 0 {
            self.focus_index = self.focus_order.len() - 1;
        } else {
            self.focus_index -= 1;
        }
    }

    /// Move focus to the given field, if it is focusable
    pub fn focus_field(&mut self, id: FieldId) -> bool {
        match self
            .focus_order
            .iter()
            .position(|f| *f == Focus::Field(id))
        {
            Some(index) => {
                self.focus_index = index;
                true
            }
            None => false,
        }
    }

    /// Add an error to the display queue
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    /// Remove the error currently shown
    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }
}
