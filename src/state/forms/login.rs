//! The login form definition

use super::field::{FieldDescriptor, SectionDescriptor};
use super::rule::{RuleKind, ValidationRule};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

pub const EMAIL_TITLE: &str = "Email";
pub const PASSWORD_TITLE: &str = "Password";

/// Password strength requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_digit: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            require_digit: false,
        }
    }
}

impl PasswordPolicy {
    fn rules(&self) -> Vec<ValidationRule> {
        let mut rules = vec![
            ValidationRule::of(RuleKind::MinLength(self.min_length)),
            ValidationRule::of(RuleKind::HasUppercase),
            ValidationRule::of(RuleKind::HasLowercase),
        ];
        if self.require_digit {
            rules.push(ValidationRule::of(RuleKind::HasDigit));
        }
        rules.push(ValidationRule::of(RuleKind::HasSpecialChar));
        rules
    }
}

/// A single "Login" section with an email and a password field
pub fn login_sections(policy: &PasswordPolicy) -> Vec<SectionDescriptor> {
    let email = FieldDescriptor::text(EMAIL_TITLE, "Username")
        .with_rule(ValidationRule::of(RuleKind::IsValidEmail));

    let password = FieldDescriptor::secret(PASSWORD_TITLE, "Password").with_rules(policy.rules());

    vec![SectionDescriptor::new("Login", vec![email, password])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_login_layout() {
        let sections = login_sections(&PasswordPolicy::default());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Login");

        let titles: Vec<&str> = sections[0].fields.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec![EMAIL_TITLE, PASSWORD_TITLE]);
        assert!(!sections[0].fields[0].obscured_by_default);
        assert!(sections[0].fields[1].obscured_by_default);
    }

    #[test]
    fn test_password_rule_messages() {
        let sections = login_sections(&PasswordPolicy::default());
        let messages: Vec<&str> = sections[0].fields[1]
            .rules
            .iter()
            .map(|r| r.message())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Password must be at least 8 characters",
                "Password must contain at least one uppercase letter",
                "Password must contain at least one lowercase letter",
                "Password must contain at least one special character",
            ]
        );
    }

    #[test]
    fn test_min_length_is_configurable() {
        let policy = PasswordPolicy {
            min_length: 12,
            ..Default::default()
        };
        let sections = login_sections(&policy);
        assert_eq!(
            sections[0].fields[1].rules[0].kind(),
            RuleKind::MinLength(12)
        );
    }

    #[test]
    fn test_digit_rule_before_special_char() {
        let policy = PasswordPolicy {
            require_digit: true,
            ..Default::default()
        };
        let sections = login_sections(&policy);
        let kinds: Vec<RuleKind> = sections[0].fields[1].rules.iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                RuleKind::MinLength(8),
                RuleKind::HasUppercase,
                RuleKind::HasLowercase,
                RuleKind::HasDigit,
                RuleKind::HasSpecialChar,
            ]
        );
    }
}
