//! Form value snapshot

use super::field::{Field, FieldError, FieldValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current value of every registration field.
///
/// All nine fields are always present; a fresh snapshot holds empty strings
/// and an unchecked terms box.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub dob: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from name/value pairs as a web-style host would send them.
    ///
    /// Missing names keep their defaults. Names outside the form are rejected.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = (&'a str, FieldValue)>,
    {
        let mut values = Self::default();
        for (name, value) in pairs {
            let field: Field = name.parse()?;
            values.set(field, value);
        }
        Ok(values)
    }

    /// Get a field's value
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Terms => FieldValue::Flag(self.terms),
            _ => FieldValue::Text(self.text(field).to_string()),
        }
    }

    /// Borrow a text field's value (empty for the terms checkbox)
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Country => &self.country,
            Field::Dob => &self.dob,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Terms => "",
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::Country => Some(&mut self.country),
            Field::Dob => Some(&mut self.dob),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::Terms => None,
        }
    }

    /// Set a field's value. A value of the wrong shape stores as empty / false.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        match self.text_mut(field) {
            Some(slot) => *slot = value.as_text().to_string(),
            None => self.terms = value.as_flag(),
        }
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("country", &self.country)
            .field("dob", &self.dob)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("terms", &self.terms)
            .finish()
    }
}
