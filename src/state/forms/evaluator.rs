//! Validation evaluation

use super::field::FieldDescriptor;
use super::rule::ValidationRule;

/// Recompute every rule of `descriptor` against `text`, preserving order.
///
/// Pure: no state is touched, so it is safe to call on every keystroke.
pub fn evaluate(descriptor: &FieldDescriptor, text: &str) -> Vec<ValidationRule> {
    descriptor
        .rules
        .iter()
        .map(|rule| rule.evaluated(text))
        .collect()
}

/// True when every rule in the list currently holds
pub fn all_satisfied(rules: &[ValidationRule]) -> bool {
    rules.iter().all(ValidationRule::satisfied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::rule::RuleKind;
    use pretty_assertions::assert_eq;

    fn password() -> FieldDescriptor {
        FieldDescriptor::secret("Password", "Password").with_rules([
            ValidationRule::of(RuleKind::MinLength(8)),
            ValidationRule::of(RuleKind::HasUppercase),
            ValidationRule::of(RuleKind::HasLowercase),
            ValidationRule::of(RuleKind::HasSpecialChar),
        ])
    }

    fn flags(rules: &[ValidationRule]) -> Vec<(RuleKind, bool)> {
        rules.iter().map(|r| (r.kind(), r.satisfied())).collect()
    }

    #[test]
    fn test_password_lowercase_only() {
        let rules = evaluate(&password(), "abcdefgh");
        assert_eq!(
            flags(&rules),
            vec![
                (RuleKind::MinLength(8), true),
                (RuleKind::HasUppercase, false),
                (RuleKind::HasLowercase, true),
                (RuleKind::HasSpecialChar, false),
            ]
        );
        assert!(!all_satisfied(&rules));
    }

    #[test]
    fn test_password_strong() {
        let rules = evaluate(&password(), "Abcdefg!");
        assert!(all_satisfied(&rules));
    }

    #[test]
    fn test_email_valid() {
        let email = FieldDescriptor::text("Email", "Username")
            .with_rule(ValidationRule::of(RuleKind::IsValidEmail));
        let rules = evaluate(&email, "user@example.com");
        assert_eq!(flags(&rules), vec![(RuleKind::IsValidEmail, true)]);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let descriptor = password();
        assert_eq!(
            evaluate(&descriptor, "Hello world"),
            evaluate(&descriptor, "Hello world")
        );
    }

    #[test]
    fn test_evaluate_leaves_descriptor_untouched() {
        let descriptor = password();
        let before = descriptor.clone();
        let _ = evaluate(&descriptor, "x");
        assert_eq!(descriptor, before);
    }

    #[test]
    fn test_no_rules_is_satisfied() {
        let descriptor = FieldDescriptor::text("Nickname", "Optional");
        let rules = evaluate(&descriptor, "");
        assert!(rules.is_empty());
        assert!(all_satisfied(&rules));
    }
}
