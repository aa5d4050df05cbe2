//! Form field and section descriptors

use super::rule::ValidationRule;
use std::fmt;
use uuid::Uuid;

/// Stable identity of a field within a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static configuration for one form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub title: String,
    pub hint: String,
    pub obscured_by_default: bool,
    pub enabled: bool,
    pub rules: Vec<ValidationRule>,
}

impl FieldDescriptor {
    /// Create a plain, enabled text field with no rules
    pub fn text(title: &str, hint: &str) -> Self {
        Self {
            id: FieldId::new(),
            title: title.to_string(),
            hint: hint.to_string(),
            obscured_by_default: false,
            enabled: true,
            rules: Vec::new(),
        }
    }

    /// Create a password-style field, obscured until revealed
    pub fn secret(title: &str, hint: &str) -> Self {
        Self {
            obscured_by_default: true,
            ..Self::text(title, hint)
        }
    }

    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = ValidationRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    #[cfg(test)]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Whether the UI offers a reveal/obscure affordance
    pub fn is_obscurable(&self) -> bool {
        self.obscured_by_default
    }
}

/// A titled, ordered group of fields
#[derive(Debug, Clone, PartialEq)]
pub struct SectionDescriptor {
    pub title: String,
    pub fields: Vec<FieldDescriptor>,
}

impl SectionDescriptor {
    pub fn new(title: &str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            title: title.to_string(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::rule::RuleKind;

    #[test]
    fn test_field_ids_are_unique() {
        let a = FieldDescriptor::text("Email", "Username");
        let b = FieldDescriptor::text("Email", "Username");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_secret_is_obscurable() {
        let field = FieldDescriptor::secret("Password", "Password");
        assert!(field.obscured_by_default);
        assert!(field.is_obscurable());
        assert!(field.enabled);
    }

    #[test]
    fn test_builder_keeps_rule_order() {
        let field = FieldDescriptor::secret("Password", "Password")
            .with_rule(ValidationRule::of(RuleKind::MinLength(8)))
            .with_rules([
                ValidationRule::of(RuleKind::HasUppercase),
                ValidationRule::of(RuleKind::HasLowercase),
            ]);
        let kinds: Vec<_> = field.rules.iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                RuleKind::MinLength(8),
                RuleKind::HasUppercase,
                RuleKind::HasLowercase
            ]
        );
    }

    #[test]
    fn test_disabled() {
        let field = FieldDescriptor::text("Email", "Username").disabled();
        assert!(!field.enabled);
    }
}
