//! Application state and core logic

use crate::auth::{LoginHandler, NoopLoginHandler};
use crate::config::TuiConfig;
use crate::platform::has_shortcut_modifier;
use crate::state::{login_sections, AppState, FormModel, FormSnapshot, Status, Subscription};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Reactive form state
    pub form: FormModel,
    /// Focus, errors and status
    pub state: AppState,
    /// Character drawn for obscured text
    pub mask_char: char,
    /// Collaborator called on submit
    login: Box<dyn LoginHandler>,
    /// Change loggers, released with the app
    subscriptions: Vec<Subscription>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App with the stub login handler
    pub fn new(config: &TuiConfig) -> Result<Self> {
        Self::with_handler(config, Box::new(NoopLoginHandler))
    }

    pub fn with_handler(config: &TuiConfig, login: Box<dyn LoginHandler>) -> Result<Self> {
        let form = FormModel::initialize(login_sections(&config.password_policy()))?;
        let state = AppState::new(form.fields().filter(|f| f.enabled).map(|f| f.id));
        let subscriptions = log_field_changes(&form)?;

        Ok(Self {
            form,
            state,
            mask_char: config.mask_char(),
            login,
            subscriptions,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        let shortcut = has_shortcut_modifier(key.modifiers);

        match key.code {
            KeyCode::Esc => self.request_quit(),
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Char('s') if shortcut => self.submit().await?,
            KeyCode::Char('r') if shortcut => self.toggle_focused_visibility()?,
            KeyCode::Enter if self.state.is_submit_focused() => self.submit().await?,
            KeyCode::Enter => self.state.next_focus(),
            KeyCode::Char(c) if !shortcut && !key.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(id) = self.state.focused_field() {
                    self.form.push_char(id, c)?;
                }
            }
            KeyCode::Backspace => {
                if let Some(id) = self.state.focused_field() {
                    self.form.pop_char(id)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Reveal or obscure the focused field if it offers the affordance
    fn toggle_focused_visibility(&mut self) -> Result<()> {
        let Some(id) = self.state.focused_field() else {
            return Ok(());
        };
        if self.form.descriptor(id)?.is_obscurable() {
            self.form.toggle_obscured(id)?;
        }
        Ok(())
    }

    /// Validate the form and hand the snapshot to the login handler
    pub async fn submit(&mut self) -> Result<()> {
        let snapshot = self.form.collect_snapshot();
        if !snapshot.is_valid() {
            self.reject_submit(&snapshot);
            return Ok(());
        }

        self.state.submitting = true;
        let result = self.login.submit(&snapshot).await;
        self.state.submitting = false;

        match result {
            Ok(outcome) => {
                tracing::info!(?outcome, "login finished");
                self.state.status_message = Some(outcome.status());
            }
            Err(err) => {
                tracing::warn!("login failed: {err:#}");
                self.push_error(format!("Login failed: {err:#}"));
            }
        }
        Ok(())
    }

    fn reject_submit(&mut self, snapshot: &FormSnapshot) {
        self.form.touch_all();
        let invalid = snapshot.invalid_titles();
        tracing::debug!(?invalid, "submit blocked by validation");
        self.state.status_message = Some(Status::Blocked(format!(
            "Please fix: {}",
            invalid.join(", ")
        )));

        if let Some(first) = snapshot.fields.iter().find(|f| !f.all_rules_satisfied) {
            self.state.focus_field(first.id);
        }
    }

    /// Release the change loggers and any other form subscribers
    pub fn teardown(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            tracing::trace!(field = %subscription.field(), "releasing change logger");
            subscription.dispose();
        }
        self.form.clear_subscribers();
    }

    #[cfg(test)]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Subscribe a debug logger to every field. Obscurable field text is never logged.
fn log_field_changes(form: &FormModel) -> Result<Vec<Subscription>> {
    let mut subscriptions = Vec::new();
    for field in form.fields() {
        let title = field.title.clone();
        let secret = field.is_obscurable();
        let subscription = form.subscribe(field.id, move |event| {
            let unmet = event.rules.iter().filter(|r| !r.satisfied()).count();
            let len = event.state.text.chars().count();
            if secret {
                tracing::debug!(field = %title, id = %event.field, len, unmet, obscured = event.state.obscured(), "field changed");
            } else {
                tracing::debug!(field = %title, id = %event.field, text = %event.state.text, unmet, "field changed");
            }
        })?;
        subscriptions.push(subscription);
    }
    Ok(subscriptions)
}
