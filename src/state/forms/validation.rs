//! Field validation rules
//!
//! Each field has a required check followed by at most one format check. Only
//! the first failing rule's message is reported. The only cross-field rule is
//! password confirmation, which reads the password from the snapshot.

use super::field::{Field, FieldValue};
use super::values::FormValues;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

// ASCII digits only; `\d` would also accept other Unicode digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Validate one field's value against the current snapshot.
///
/// Returns `None` when the value is valid.
pub fn validate_field(
    field: Field,
    value: &FieldValue,
    snapshot: &FormValues,
) -> Option<&'static str> {
    let text = value.as_text();
    match field {
        Field::FirstName => {
            if is_blank(text) {
                return Some("First name is required");
            }
            None
        }
        Field::LastName => {
            if is_blank(text) {
                return Some("Last name is required");
            }
            None
        }
        Field::Email => {
            if text.is_empty() {
                return Some("Email is required");
            }
            if !EMAIL_RE.is_match(text) {
                return Some("Email is invalid");
            }
            None
        }
        Field::Phone => {
            if text.is_empty() {
                return Some("Phone number is required");
            }
            if !PHONE_RE.is_match(text) {
                return Some("Phone must be 10 digits");
            }
            None
        }
        Field::Country => {
            if text.is_empty() {
                return Some("Please select country");
            }
            None
        }
        Field::Dob => {
            if text.is_empty() {
                return Some("Date of birth required");
            }
            None
        }
        Field::Password => {
            if text.is_empty() {
                return Some("Password is required");
            }
            if text.encode_utf16().count() < MIN_PASSWORD_LENGTH {
                return Some("Password must be at least 8 characters");
            }
            None
        }
        Field::ConfirmPassword => {
            if text.is_empty() {
                return Some("Confirm Password is required");
            }
            if text != snapshot.password {
                return Some("Passwords do not match");
            }
            None
        }
        Field::Terms => {
            if !value.as_flag() {
                return Some("Accept terms to proceed");
            }
            None
        }
    }
}

/// Empty after trimming whitespace and byte order marks
fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').is_empty()
}

/// Validate every field of a snapshot
pub fn validate_form(snapshot: &FormValues) -> ErrorMap {
    let mut errors = ErrorMap::default();
    for field in Field::ALL {
        let message = validate_field(field, &snapshot.get(field), snapshot);
        errors.record(field, message);
    }
    errors
}

/// Per-field error messages; a missing entry means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    messages: BTreeMap<Field, &'static str>,
}

impl ErrorMap {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Iterate failing fields in display order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.messages.iter().map(|(field, msg)| (*field, *msg))
    }

    /// Store the outcome of validating `field`; `None` clears its entry
    pub(crate) fn record(&mut self, field: Field, message: Option<&'static str>) {
        match message {
            Some(msg) => {
                self.messages.insert(field, msg);
            }
            None => {
                self.messages.remove(&field);
            }
        }
    }
}
