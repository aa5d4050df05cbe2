//! Reactive form model: field states, mutation and subscriptions

use super::evaluator::{all_satisfied, evaluate};
use super::field::{FieldDescriptor, FieldId, SectionDescriptor};
use super::field_state::FieldState;
use super::rule::ValidationRule;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};
use thiserror::Error;

/// Errors raised by the form model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Malformed form definition, fatal to construction
    #[error("invalid form definition: {0}")]
    Configuration(String),
    /// Operation referenced a field the form does not contain
    #[error("unknown field: {0}")]
    UnknownField(FieldId),
}

/// Payload delivered to subscribers after a field changes
#[derive(Debug, Clone, Copy)]
pub struct FieldEvent<'a> {
    pub field: FieldId,
    pub state: &'a FieldState,
    pub rules: &'a [ValidationRule],
}

type Callback = Rc<dyn Fn(&FieldEvent<'_>)>;

#[derive(Default)]
struct SubscriberRegistry {
    next_id: u64,
    by_field: HashMap<FieldId, Vec<(u64, Callback)>>,
}

impl SubscriberRegistry {
    fn insert(&mut self, field: FieldId, callback: Callback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.by_field.entry(field).or_default().push((id, callback));
        id
    }

    fn remove(&mut self, field: FieldId, id: u64) {
        if let Some(subs) = self.by_field.get_mut(&field) {
            subs.retain(|(sub_id, _)| *sub_id != id);
            if subs.is_empty() {
                self.by_field.remove(&field);
            }
        }
    }

    fn contains(&self, field: FieldId, id: u64) -> bool {
        self.by_field
            .get(&field)
            .is_some_and(|subs| subs.iter().any(|(sub_id, _)| *sub_id == id))
    }

    fn callbacks(&self, field: FieldId) -> Vec<(u64, Callback)> {
        self.by_field.get(&field).cloned().unwrap_or_default()
    }

    #[cfg(test)]
    fn count(&self, field: FieldId) -> usize {
        self.by_field.get(&field).map_or(0, Vec::len)
    }
}

/// Disposer returned by [`FormModel::subscribe`].
///
/// The callback stays registered until this handle is disposed or dropped.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    registry: Weak<RefCell<SubscriberRegistry>>,
    field: FieldId,
    id: u64,
}

impl Subscription {
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// Unsubscribe now
    pub fn dispose(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.field, self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("field", &self.field)
            .field("id", &self.id)
            .finish()
    }
}

/// One field's entry in a submit snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotField {
    pub id: FieldId,
    pub title: String,
    pub text: String,
    pub all_rules_satisfied: bool,
}

/// Values handed to a submit handler, in display order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    pub fields: Vec<SnapshotField>,
}

impl FormSnapshot {
    /// Look up a field by its display title
    pub fn by_title(&self, title: &str) -> Option<&SnapshotField> {
        self.fields.iter().find(|f| f.title == title)
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.all_rules_satisfied)
    }

    /// Titles of fields with at least one unmet rule
    pub fn invalid_titles(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| !f.all_rules_satisfied)
            .map(|f| f.title.as_str())
            .collect()
    }
}

#[derive(Debug, Clone)]
struct FieldEntry {
    state: FieldState,
    rules: Vec<ValidationRule>,
}

/// Owns the form definition and the live state of every field
pub struct FormModel {
    sections: Vec<SectionDescriptor>,
    entries: HashMap<FieldId, FieldEntry>,
    touched: HashSet<FieldId>,
    subscribers: Rc<RefCell<SubscriberRegistry>>,
}

impl FormModel {
    /// Build a model with one empty state per field
    pub fn initialize(sections: Vec<SectionDescriptor>) -> Result<Self, FormError> {
        if sections.is_empty() {
            return Err(FormError::Configuration(
                "form has no sections".to_string(),
            ));
        }

        let mut entries = HashMap::new();
        for section in &sections {
            for field in &section.fields {
                if let Some(rule) = field.rules.iter().find(|r| r.message().is_empty()) {
                    return Err(FormError::Configuration(format!(
                        "field '{}' has a {:?} rule with an empty message",
                        field.title,
                        rule.kind()
                    )));
                }
                let entry = FieldEntry {
                    state: FieldState::new(field.obscured_by_default),
                    rules: evaluate(field, ""),
                };
                if entries.insert(field.id, entry).is_some() {
                    return Err(FormError::Configuration(format!(
                        "duplicate field id {} ('{}' in section '{}')",
                        field.id, field.title, section.title
                    )));
                }
            }
        }

        tracing::debug!(
            sections = sections.len(),
            fields = entries.len(),
            "form initialized"
        );

        Ok(Self {
            sections,
            entries,
            touched: HashSet::new(),
            subscribers: Rc::new(RefCell::new(SubscriberRegistry::default())),
        })
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    /// All field descriptors in display order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    #[cfg(test)]
    pub fn field_ids(&self) -> Vec<FieldId> {
        self.fields().map(|f| f.id).collect()
    }

    pub fn descriptor(&self, id: FieldId) -> Result<&FieldDescriptor, FormError> {
        self.fields()
            .find(|f| f.id == id)
            .ok_or(FormError::UnknownField(id))
    }

    pub fn current_state(&self, id: FieldId) -> Result<FieldState, FormError> {
        self.entry(id).map(|e| e.state.clone())
    }

    /// Rules as of the last text change
    pub fn rules(&self, id: FieldId) -> Result<&[ValidationRule], FormError> {
        self.entry(id).map(|e| e.rules.as_slice())
    }

    /// Whether the field has been edited or a submit was attempted
    pub fn is_touched(&self, id: FieldId) -> bool {
        self.touched.contains(&id)
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(self.entries.keys().copied());
    }

    /// Replace the field's text and notify its subscribers.
    ///
    /// Setting the text it already holds is a no-op.
    pub fn set_text(&mut self, id: FieldId, text: impl Into<String>) -> Result<(), FormError> {
        let text = text.into();
        let rules = {
            let descriptor = self.descriptor(id)?;
            if self.entry(id)?.state.text == text {
                return Ok(());
            }
            evaluate(descriptor, &text)
        };

        let entry = self.entry_mut(id)?;
        entry.state.text = text;
        entry.rules = rules;
        self.touched.insert(id);
        self.notify(id);
        Ok(())
    }

    /// Append one typed character
    pub fn push_char(&mut self, id: FieldId, c: char) -> Result<(), FormError> {
        let mut text = self.entry(id)?.state.text.clone();
        text.push(c);
        self.set_text(id, text)
    }

    /// Remove the last character, if any
    pub fn pop_char(&mut self, id: FieldId) -> Result<(), FormError> {
        let mut text = self.entry(id)?.state.text.clone();
        if text.pop().is_none() {
            return Ok(());
        }
        self.set_text(id, text)
    }

    /// Flip between obscured and revealed and notify subscribers.
    ///
    /// Permitted on every field, obscurable or not.
    pub fn toggle_obscured(&mut self, id: FieldId) -> Result<(), FormError> {
        let entry = self.entry_mut(id)?;
        entry.state.visibility = entry.state.visibility.toggle();
        tracing::trace!(field = %id, visibility = ?entry.state.visibility, "visibility toggled");
        self.notify(id);
        Ok(())
    }

    /// Register `callback` for changes to one field
    pub fn subscribe<F>(&self, id: FieldId, callback: F) -> Result<Subscription, FormError>
    where
        F: Fn(&FieldEvent<'_>) + 'static,
    {
        self.entry(id)?;
        let sub_id = self.subscribers.borrow_mut().insert(id, Rc::new(callback));
        Ok(Subscription {
            registry: Rc::downgrade(&self.subscribers),
            field: id,
            id: sub_id,
        })
    }

    #[cfg(test)]
    pub fn subscriber_count(&self, id: FieldId) -> usize {
        self.subscribers.borrow().count(id)
    }

    /// Release every subscriber, as on teardown
    pub fn clear_subscribers(&mut self) {
        self.subscribers.borrow_mut().by_field.clear();
    }

    /// Per-field text and rule status, for a submit handler
    pub fn collect_snapshot(&self) -> FormSnapshot {
        let fields = self
            .fields()
            .filter_map(|field| {
                self.entries.get(&field.id).map(|entry| SnapshotField {
                    id: field.id,
                    title: field.title.clone(),
                    text: entry.state.text.clone(),
                    all_rules_satisfied: all_satisfied(&entry.rules),
                })
            })
            .collect();
        FormSnapshot { fields }
    }

    fn entry(&self, id: FieldId) -> Result<&FieldEntry, FormError> {
        self.entries.get(&id).ok_or(FormError::UnknownField(id))
    }

    fn entry_mut(&mut self, id: FieldId) -> Result<&mut FieldEntry, FormError> {
        self.entries.get_mut(&id).ok_or(FormError::UnknownField(id))
    }

    fn notify(&self, id: FieldId) {
        let Some(entry) = self.entries.get(&id) else {
            return;
        };
        // Borrow is released before callbacks run so they may drop subscriptions.
        let callbacks = self.subscribers.borrow().callbacks(id);
        let event = FieldEvent {
            field: id,
            state: &entry.state,
            rules: &entry.rules,
        };
        for (sub_id, callback) in callbacks {
            if self.subscribers.borrow().contains(id, sub_id) {
                callback(&event);
            }
        }
    }
}

impl std::fmt::Debug for FormModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormModel")
            .field("sections", &self.sections)
            .field("touched", &self.touched)
            .finish_non_exhaustive()
    }
}
