//! Contact form validation.
//!
//! DESIGN
//! ======
//! Validation runs three ordered, short-circuiting checks: every field
//! filled, then the email shape, then the message length. Only one failure
//! category is ever reported per attempt, and the empty-field category
//! collapses to a single message however many fields are blank.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use crate::consts;

/// A user-facing validation failure. `Display` is the toast text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill out all fields.")]
    EmptyFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Your message should be at least {0} characters long.")]
    MessageTooShort(usize),
}

/// Outcome of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Trimmed value per field key.
    pub values: BTreeMap<String, String>,
    /// Distinct errors in the order they were found.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn invalid(values: BTreeMap<String, String>, error: ValidationError) -> Self {
        Self { is_valid: false, values, errors: vec![error] }
    }

    /// Trimmed value for `key`, empty when the field is not declared.
    #[must_use]
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }
}

/// Validate `(field key, raw value)` pairs in document order.
#[must_use]
pub fn validate(fields: &[(String, String)], min_message_chars: usize) -> ValidationResult {
    let mut values = BTreeMap::new();
    let mut errors = Vec::new();
    for (key, raw) in fields {
        let value = trim_field(raw);
        if value.is_empty() && !errors.contains(&ValidationError::EmptyFields) {
            errors.push(ValidationError::EmptyFields);
        }
        values.insert(key.clone(), value.to_owned());
    }
    if !errors.is_empty() {
        return ValidationResult { is_valid: false, values, errors };
    }

    let email = values.get(consts::EMAIL_FIELD).map_or("", String::as_str);
    if !is_email_shape(email) {
        return ValidationResult::invalid(values, ValidationError::InvalidEmail);
    }

    let message = values.get(consts::MESSAGE_FIELD).map_or("", String::as_str);
    if message.chars().count() < min_message_chars {
        return ValidationResult::invalid(values, ValidationError::MessageTooShort(min_message_chars));
    }

    ValidationResult { is_valid: true, values, errors }
}

/// Strip surrounding whitespace, including the byte-order mark that
/// browsers treat as blank.
fn trim_field(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Permissive email shape: `local@label.label[.label…]`.
///
/// The local part allows ASCII word characters and `.!#$%&'*+/=?^`{|}~-`;
/// each domain label allows ASCII word characters and `-`, and at least two
/// labels are required.
#[must_use]
pub fn is_email_shape(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }
    let mut labels = 0;
    for label in domain.split('.') {
        if label.is_empty() || !label.chars().all(is_label_char) {
            return false;
        }
        labels += 1;
    }
    labels >= 2
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_local_char(c: char) -> bool {
    is_word_char(c) || ".!#$%&'*+/=?^`{|}~-".contains(c)
}

fn is_label_char(c: char) -> bool {
    is_word_char(c) || c == '-'
}

/// Field that should receive focus when `key` is pressed in field `index`.
///
/// Only the commit key advances, and never from the last field.
#[must_use]
pub fn next_focus(index: usize, field_count: usize, key: &str) -> Option<usize> {
    if key != consts::COMMIT_KEY || index + 1 >= field_count {
        return None;
    }
    Some(index + 1)
}
