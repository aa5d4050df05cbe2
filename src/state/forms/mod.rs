//! Form domain layer
//!
//! Reactive form state: descriptors, per-field observable state,
//! validation and the row projection consumed by the UI.

mod evaluator;
mod field;
mod field_state;
mod form_model;
mod login;
mod rows;
mod rule;

pub use field::FieldId;
pub use form_model::{FormModel, FormSnapshot, Subscription};
pub use login::{login_sections, PasswordPolicy, DEFAULT_MIN_PASSWORD_LENGTH, EMAIL_TITLE};
pub use rows::{FieldRow, FormRow};

#[cfg(test)]
pub use login::PASSWORD_TITLE;
