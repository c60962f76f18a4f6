//! Registration form controller
//!
//! Owns the value snapshot, the touched set and the error map, and applies
//! the validation rules in response to change, blur and submit events.

use super::field::{Field, FieldInput};
use super::submission::{Submission, SubmissionHandler};
use super::validation::{validate_field, validate_form, ErrorMap};
use super::values::FormValues;

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Submission),
    Rejected { failing: usize },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Which fields have been blurred or submitted at least once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedSet {
    flags: [bool; Field::COUNT],
}

impl TouchedSet {
    pub fn contains(&self, field: Field) -> bool {
        self.flags[field.index()]
    }

    pub fn insert(&mut self, field: Field) {
        self.flags[field.index()] = true;
    }

    pub fn insert_all(&mut self) {
        self.flags = [true; Field::COUNT];
    }

    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|t| *t)
    }
}

/// State bundle for the registration form
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    values: FormValues,
    touched: TouchedSet,
    errors: ErrorMap,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing values. Nothing is touched, so no errors show yet.
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Error to display under `field`, if any
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    /// Store a new value; revalidate immediately only if the field is touched
    pub fn change(&mut self, input: FieldInput) {
        let field = input.field;
        self.values.set(field, input.into_value());

        if self.touched.contains(field) {
            let message = validate_field(field, &self.values.get(field), &self.values);
            self.errors.record(field, message);
        }
    }

    /// Mark the field touched and validate the value the control reported
    pub fn blur(&mut self, input: FieldInput) {
        let field = input.field;
        self.touched.insert(field);
        let message = validate_field(field, &input.into_value(), &self.values);
        self.errors.record(field, message);
    }

    /// Blur using the stored value of `field`
    pub fn blur_field(&mut self, field: Field) {
        let input = self.input_for(field);
        self.blur(input);
    }

    /// Validate everything; on success hand the values to `handler` and reset
    pub fn submit(&mut self, handler: &mut dyn SubmissionHandler) -> SubmitOutcome {
        self.touched.insert_all();
        self.errors = validate_form(&self.values);

        if !self.errors.is_empty() {
            let failing = self.errors.len();
            tracing::info!(failing, "registration rejected");
            return SubmitOutcome::Rejected { failing };
        }

        let submission = Submission::new(std::mem::take(&mut self.values));
        handler.submitted(&submission);
        self.reset();
        SubmitOutcome::Accepted(submission)
    }

    /// Return to the initial empty state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current value of `field` in the shape its control would report it
    pub fn input_for(&self, field: Field) -> FieldInput {
        if field.is_checkbox() {
            FieldInput::checkbox(field, self.values.terms)
        } else {
            FieldInput::text(field, self.values.text(field))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::submission::MockSubmissionHandler;
    use pretty_assertions::assert_eq;

    fn fill_valid(form: &mut RegistrationForm) {
        let text_values = [
            (Field::FirstName, "Jane"),
            (Field::LastName, "Doe"),
            (Field::Email, "jane@doe.com"),
            (Field::Phone, "9876543210"),
            (Field::Country, "India"),
            (Field::Dob, "1990-01-01"),
            (Field::Password, "password123"),
            (Field::ConfirmPassword, "password123"),
        ];
        for (field, value) in text_values {
            form.change(FieldInput::text(field, value));
        }
        form.change(FieldInput::checkbox(Field::Terms, true));
    }

    fn never_called() -> MockSubmissionHandler {
        let mut handler = MockSubmissionHandler::new();
        handler.expect_submitted().times(0);
        handler
    }

    #[test]
    fn test_with_values_starts_untouched() {
        let values = FormValues {
            first_name: "Jane".to_string(),
            ..Default::default()
        };
        let form = RegistrationForm::with_values(values.clone());

        assert_eq!(form.values(), &values);
        assert!(form.touched().is_empty());
        assert!(form.errors().is_empty());
    }

    mod change {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_untouched_change_defers_validation() {
            let mut form = RegistrationForm::new();
            form.change(FieldInput::text(Field::Email, "bad"));
            assert_eq!(form.values().email, "bad");
            assert_eq!(form.error(Field::Email), None);
        }

        #[test]
        fn test_touched_change_revalidates() {
            let mut form = RegistrationForm::new();
            form.blur(FieldInput::text(Field::Phone, ""));
            assert_eq!(form.error(Field::Phone), Some("Phone number is required"));

            form.change(FieldInput::text(Field::Phone, "123"));
            assert_eq!(form.error(Field::Phone), Some("Phone must be 10 digits"));

            form.change(FieldInput::text(Field::Phone, "1234567890"));
            assert_eq!(form.error(Field::Phone), None);
        }

        #[test]
        fn test_checkbox_change_uses_checked_flag() {
            let mut form = RegistrationForm::new();
            form.blur(FieldInput::checkbox(Field::Terms, false));
            assert_eq!(form.error(Field::Terms), Some("Accept terms to proceed"));

            form.change(FieldInput::checkbox(Field::Terms, true));
            assert!(form.values().terms);
            assert_eq!(form.error(Field::Terms), None);
        }

        #[test]
        fn test_change_leaves_other_errors_alone() {
            let mut form = RegistrationForm::new();
            form.blur(FieldInput::text(Field::FirstName, ""));
            form.blur(FieldInput::text(Field::Email, "x"));
            form.change(FieldInput::text(Field::FirstName, "Jane"));
            assert_eq!(form.error(Field::FirstName), None);
            assert_eq!(form.error(Field::Email), Some("Email is invalid"));
        }
    }

    mod blur {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blur_marks_touched_and_validates() {
            let mut form = RegistrationForm::new();
            assert!(!form.touched().contains(Field::Dob));
            form.blur(FieldInput::text(Field::Dob, ""));
            assert!(form.touched().contains(Field::Dob));
            assert_eq!(form.error(Field::Dob), Some("Date of birth required"));
        }

        #[test]
        fn test_touch_then_fix_clears_without_second_blur() {
            let mut form = RegistrationForm::new();
            form.blur(FieldInput::text(Field::Email, "bad"));
            assert_eq!(form.error(Field::Email), Some("Email is invalid"));

            form.change(FieldInput::text(Field::Email, "good@x.com"));
            assert_eq!(form.error(Field::Email), None);
        }

        #[test]
        fn test_blur_field_uses_stored_value() {
            let mut form = RegistrationForm::new();
            form.change(FieldInput::text(Field::Password, "short"));
            form.blur_field(Field::Password);
            assert_eq!(
                form.error(Field::Password),
                Some("Password must be at least 8 characters")
            );
        }

        #[test]
        fn test_touched_is_monotonic() {
            let mut form = RegistrationForm::new();
            form.blur_field(Field::LastName);
            form.change(FieldInput::text(Field::LastName, "Doe"));
            form.blur_field(Field::LastName);
            assert!(form.touched().contains(Field::LastName));
        }
    }

    mod confirm_password {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_confirm_revalidates_against_updated_snapshot() {
            let mut form = RegistrationForm::new();
            form.change(FieldInput::text(Field::Password, "password123"));
            form.blur(FieldInput::text(Field::ConfirmPassword, "password123"));
            assert_eq!(form.error(Field::ConfirmPassword), None);

            form.change(FieldInput::text(Field::ConfirmPassword, "password12"));
            assert_eq!(
                form.error(Field::ConfirmPassword),
                Some("Passwords do not match")
            );
        }

        #[test]
        fn test_password_change_then_confirm_change_detects_mismatch() {
            let mut form = RegistrationForm::new();
            form.change(FieldInput::text(Field::Password, "password123"));
            form.change(FieldInput::text(Field::ConfirmPassword, "password123"));
            form.blur_field(Field::ConfirmPassword);
            assert_eq!(form.error(Field::ConfirmPassword), None);

            // Password changes do not revalidate the confirmation on their own
            form.change(FieldInput::text(Field::Password, "password456"));
            assert_eq!(form.error(Field::ConfirmPassword), None);

            // The next change to the confirmation picks up the new password
            form.change(FieldInput::text(Field::ConfirmPassword, "password123"));
            assert_eq!(
                form.error(Field::ConfirmPassword),
                Some("Passwords do not match")
            );
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_empty_form_touches_and_fails_every_field() {
            let mut form = RegistrationForm::new();
            let mut handler = never_called();

            let outcome = form.submit(&mut handler);

            assert_eq!(outcome, SubmitOutcome::Rejected { failing: 9 });
            for field in Field::ALL {
                assert!(form.touched().contains(field), "{field} not touched");
                assert!(form.error(field).is_some(), "{field} has no error");
            }
            assert_eq!(form.error(Field::Terms), Some("Accept terms to proceed"));
        }

        #[test]
        fn test_rejected_submit_keeps_values() {
            let mut form = RegistrationForm::new();
            form.change(FieldInput::text(Field::FirstName, "Jane"));
            let mut handler = never_called();

            let outcome = form.submit(&mut handler);

            assert_eq!(outcome, SubmitOutcome::Rejected { failing: 8 });
            assert_eq!(form.values().first_name, "Jane");
            assert_eq!(form.error(Field::FirstName), None);
        }

        #[test]
        fn test_valid_submit_notifies_once_and_resets() {
            let mut form = RegistrationForm::new();
            fill_valid(&mut form);
            form.blur_field(Field::Email);

            let mut handler = MockSubmissionHandler::new();
            handler
                .expect_submitted()
                .withf(|s: &Submission| {
                    s.values.first_name == "Jane" && s.values.email == "jane@doe.com"
                })
                .times(1)
                .return_const(());

            let outcome = form.submit(&mut handler);

            match outcome {
                SubmitOutcome::Accepted(submission) => {
                    assert_eq!(submission.values.phone, "9876543210");
                    assert!(submission.values.terms);
                }
                other => panic!("expected acceptance, got {other:?}"),
            }
            assert_eq!(form.values(), &FormValues::default());
            assert!(form.touched().is_empty());
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_submit_clears_stale_errors() {
            let mut form = RegistrationForm::new();
            form.blur(FieldInput::text(Field::Email, "bad"));
            fill_valid(&mut form);
            // A blurred value that never reached the snapshot
            form.blur(FieldInput::text(Field::Phone, "1"));
            assert!(form.error(Field::Phone).is_some());

            let mut handler = MockSubmissionHandler::new();
            handler.expect_submitted().times(1).return_const(());
            assert!(form.submit(&mut handler).is_accepted());
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_form_is_reusable_after_success() {
            let mut form = RegistrationForm::new();
            let mut handler = MockSubmissionHandler::new();
            handler.expect_submitted().times(2).return_const(());

            fill_valid(&mut form);
            assert!(form.submit(&mut handler).is_accepted());
            fill_valid(&mut form);
            assert!(form.submit(&mut handler).is_accepted());
        }

        #[test]
        fn test_mismatched_confirmation_blocks_submit() {
            let mut form = RegistrationForm::new();
            fill_valid(&mut form);
            form.change(FieldInput::text(Field::ConfirmPassword, "password124"));
            let mut handler = never_called();

            let outcome = form.submit(&mut handler);

            assert_eq!(outcome, SubmitOutcome::Rejected { failing: 1 });
            assert_eq!(
                form.error(Field::ConfirmPassword),
                Some("Passwords do not match")
            );
        }
    }

    mod inputs {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_input_for_reports_control_shape() {
            let mut form = RegistrationForm::new();
            form.change(FieldInput::checkbox(Field::Terms, true));
            form.change(FieldInput::text(Field::Dob, "2000-02-29"));
            assert_eq!(
                form.input_for(Field::Terms),
                FieldInput::checkbox(Field::Terms, true)
            );
            assert_eq!(
                form.input_for(Field::Dob),
                FieldInput::text(Field::Dob, "2000-02-29")
            );
        }
    }
}
