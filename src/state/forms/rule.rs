//! Validation rule value objects

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// What a rule checks. The display message never decides behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    #[allow(dead_code)] // not used by the login form
    Required,
    MinLength(usize),
    HasUppercase,
    HasLowercase,
    HasDigit,
    HasSpecialChar,
    IsValidEmail,
}

impl RuleKind {
    /// Check the rule against the current field text
    pub fn is_satisfied_by(&self, text: &str) -> bool {
        match self {
            Self::Required => !text.trim().is_empty(),
            Self::MinLength(min) => text.chars().count() >= *min,
            Self::HasUppercase => text.chars().any(char::is_uppercase),
            Self::HasLowercase => text.chars().any(char::is_lowercase),
            Self::HasDigit => text.chars().any(|c| c.is_ascii_digit()),
            Self::HasSpecialChar => text
                .chars()
                .any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
            Self::IsValidEmail => EMAIL_PATTERN.is_match(text),
        }
    }

    /// Default message shown when the rule is unmet
    pub fn default_message(&self) -> String {
        match self {
            Self::Required => "This field is required".to_string(),
            Self::MinLength(min) => format!("Password must be at least {min} characters"),
            Self::HasUppercase => {
                "Password must contain at least one uppercase letter".to_string()
            }
            Self::HasLowercase => {
                "Password must contain at least one lowercase letter".to_string()
            }
            Self::HasDigit => "Password must contain at least one digit".to_string(),
            Self::HasSpecialChar => {
                "Password must contain at least one special character".to_string()
            }
            Self::IsValidEmail => "Please enter a valid email".to_string(),
        }
    }
}

/// One constraint on a field and whether it currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRule {
    kind: RuleKind,
    message: String,
    satisfied: bool,
}

impl ValidationRule {
    /// Create a rule with a custom message.
    ///
    /// `satisfied` starts as `true` so nothing is flagged before the first
    /// evaluation.
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            satisfied: true,
        }
    }

    /// Create a rule using the kind's default message
    pub fn of(kind: RuleKind) -> Self {
        Self::new(kind, kind.default_message())
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn satisfied(&self) -> bool {
        self.satisfied
    }

    /// Copy of this rule re-evaluated against `text`
    pub(crate) fn evaluated(&self, text: &str) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            satisfied: self.kind.is_satisfied_by(text),
        }
    }
}
