//! Form domain layer
//!
//! Field identifiers and values, the validation rules, and the controller that
//! tracks touched fields and error messages. Nothing here depends on the
//! terminal front end.

mod field;
mod form_state;
mod submission;
mod validation;
mod values;

pub use field::{Country, Field, FieldInput, FieldKind, FieldValue};
pub use form_state::{RegistrationForm, SubmitOutcome};
pub use submission::{LogSubmissionHandler, Submission, SubmissionHandler};
#[cfg(test)]
pub use submission::MockSubmissionHandler;
pub use values::FormValues;
