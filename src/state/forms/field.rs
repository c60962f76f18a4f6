//! Registration form fields and their value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when mapping external field names onto the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field: {0}")]
    Unknown(String),
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Select,
    Date,
    Password,
    Checkbox,
}

/// The nine inputs collected by the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Country,
    Dob,
    Password,
    ConfirmPassword,
    Terms,
}

impl Field {
    pub const COUNT: usize = 9;

    /// All fields in display order
    pub const ALL: [Field; Field::COUNT] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Country,
        Field::Dob,
        Field::Password,
        Field::ConfirmPassword,
        Field::Terms,
    ];

    /// Wire name used by form hosts (camelCase)
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Country => "country",
            Field::Dob => "dob",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Terms => "terms",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name *",
            Field::LastName => "Last Name *",
            Field::Email => "Email *",
            Field::Phone => "Phone *",
            Field::Country => "Country *",
            Field::Dob => "Date of Birth (YYYY-MM-DD) *",
            Field::Password => "Password *",
            Field::ConfirmPassword => "Confirm Password *",
            Field::Terms => "I agree to Terms & Conditions",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::FirstName | Field::LastName => FieldKind::Text,
            Field::Email => FieldKind::Email,
            Field::Phone => FieldKind::Phone,
            Field::Country => FieldKind::Select,
            Field::Dob => FieldKind::Date,
            Field::Password | Field::ConfirmPassword => FieldKind::Password,
            Field::Terms => FieldKind::Checkbox,
        }
    }

    pub fn is_checkbox(self) -> bool {
        self.kind() == FieldKind::Checkbox
    }

    /// Whether the field accepts free text typed by the user
    pub fn accepts_text(self) -> bool {
        !matches!(self.kind(), FieldKind::Select | FieldKind::Checkbox)
    }

    /// Position of the field in display order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Field> {
        Field::ALL.get(index).copied()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldError::Unknown(s.to_string()))
    }
}

/// Countries offered by the country select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    India,
    Usa,
    Uk,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::India, Country::Usa, Country::Uk];

    pub fn label(self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Usa => "USA",
            Country::Uk => "UK",
        }
    }

    pub fn from_label(label: &str) -> Option<Country> {
        Country::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Next select option after `current`; the empty placeholder sits between UK and India
    pub fn cycle_next(current: Option<Country>) -> Option<Country> {
        match current {
            None => Some(Country::India),
            Some(Country::India) => Some(Country::Usa),
            Some(Country::Usa) => Some(Country::Uk),
            Some(Country::Uk) => None,
        }
    }

    pub fn cycle_prev(current: Option<Country>) -> Option<Country> {
        match current {
            None => Some(Country::Uk),
            Some(Country::Uk) => Some(Country::Usa),
            Some(Country::Usa) => Some(Country::India),
            Some(Country::India) => None,
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for flags)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (returns false for text)
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }
}

/// A raw change or blur event as forwarded by the presentation layer.
///
/// Mirrors what an HTML control reports: the text value and, for checkboxes,
/// the checked flag. Which of the two is used depends on the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub field: Field,
    pub value: String,
    pub checked: bool,
}

impl FieldInput {
    pub fn text(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            checked: false,
        }
    }

    pub fn checkbox(field: Field, checked: bool) -> Self {
        Self {
            field,
            value: String::new(),
            checked,
        }
    }

    /// Resolve the value the control carries for its field
    pub fn into_value(self) -> FieldValue {
        if self.field.is_checkbox() {
            FieldValue::Flag(self.checked)
        } else {
            FieldValue::Text(self.value)
        }
    }
}
