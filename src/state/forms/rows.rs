//! Immutable row projection of a form for rendering

use super::field::FieldId;
use super::field_state::FieldState;
use super::form_model::FormModel;
use super::rule::ValidationRule;

/// Everything the renderer needs to draw one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub id: FieldId,
    pub title: String,
    pub hint: String,
    pub enabled: bool,
    pub obscurable: bool,
    pub state: FieldState,
    pub touched: bool,
    pub rules: Vec<ValidationRule>,
}

impl FieldRow {
    /// Rules to show as unmet. Nothing is flagged until the field is touched.
    pub fn unmet_rules(&self) -> impl Iterator<Item = &ValidationRule> {
        self.rules
            .iter()
            .filter(move |r| self.touched && !r.satisfied())
    }
}

/// One row of the rendered form
#[derive(Debug, Clone, PartialEq)]
pub enum FormRow {
    SectionHeader { title: String },
    Field(FieldRow),
}

impl FormModel {
    /// Project the current state into display rows
    pub fn rows(&self) -> Vec<FormRow> {
        let mut rows = Vec::new();
        for section in self.sections() {
            rows.push(FormRow::SectionHeader {
                title: section.title.clone(),
            });
            for field in &section.fields {
                let (Ok(state), Ok(rules)) = (self.current_state(field.id), self.rules(field.id))
                else {
                    continue;
                };
                rows.push(FormRow::Field(FieldRow {
                    id: field.id,
                    title: field.title.clone(),
                    hint: field.hint.clone(),
                    enabled: field.enabled,
                    obscurable: field.is_obscurable(),
                    state,
                    touched: self.is_touched(field.id),
                    rules: rules.to_vec(),
                }));
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::{FieldDescriptor, SectionDescriptor};
    use crate::state::forms::{login_sections, PasswordPolicy};

    fn field_rows(rows: &[FormRow]) -> Vec<&FieldRow> {
        rows.iter()
            .filter_map(|row| match row {
                FormRow::Field(field) => Some(field),
                FormRow::SectionHeader { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_header_precedes_fields() {
        let form = FormModel::initialize(login_sections(&PasswordPolicy::default())).unwrap();
        let rows = form.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            FormRow::SectionHeader {
                title: "Login".to_string()
            }
        );
        let fields = field_rows(&rows);
        assert_eq!(fields[0].title, "Email");
        assert_eq!(fields[1].title, "Password");
        assert!(fields[1].obscurable);
        assert!(fields[1].state.obscured());
    }

    #[test]
    fn test_untouched_rows_hide_unmet_rules() {
        let form = FormModel::initialize(login_sections(&PasswordPolicy::default())).unwrap();
        let rows = form.rows();
        for field in field_rows(&rows) {
            assert_eq!(field.unmet_rules().count(), 0);
        }
    }

    #[test]
    fn test_touched_rows_show_unmet_rules() {
        let mut form = FormModel::initialize(login_sections(&PasswordPolicy::default())).unwrap();
        let password = form.field_ids()[1];
        form.set_text(password, "abcdefgh").unwrap();

        let rows = form.rows();
        let fields = field_rows(&rows);
        let unmet: Vec<&str> = fields[1].unmet_rules().map(|r| r.message()).collect();
        assert_eq!(
            unmet,
            vec![
                "Password must contain at least one uppercase letter",
                "Password must contain at least one special character",
            ]
        );
        assert_eq!(fields[0].unmet_rules().count(), 0);
    }

    #[test]
    fn test_rows_are_a_snapshot() {
        let mut form = FormModel::initialize(login_sections(&PasswordPolicy::default())).unwrap();
        let email = form.field_ids()[0];
        let before = form.rows();
        form.set_text(email, "user@example.com").unwrap();
        let after = form.rows();
        assert_ne!(before, after);
        assert_eq!(field_rows(&before)[0].state.text, "");
    }

    #[test]
    fn test_disabled_field_row() {
        let email = FieldDescriptor::text("Email", "Username");
        let code = FieldDescriptor::text("Code", "One-time code").disabled();
        let form =
            FormModel::initialize(vec![SectionDescriptor::new("Login", vec![email, code])])
                .unwrap();
        let rows = form.rows();
        let fields = field_rows(&rows);
        assert!(fields[0].enabled);
        assert!(!fields[1].enabled);
        assert_eq!(fields[1].title, "Code");
    }
}
