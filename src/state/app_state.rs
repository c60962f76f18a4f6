//! Application state definitions

use super::forms::{
    Country, Field, FieldInput, RegistrationForm, Submission, SubmissionHandler, SubmitOutcome,
};
use super::ui_area::{FOCUS_STOPS, SUBMIT_BUTTON_INDEX};

/// Top-level state rendered by the UI
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Registration form values, touched flags and errors
    pub form: RegistrationForm,
    /// Focused stop: 0-8 are fields in display order, 9 is the Register button
    pub active_form_field: usize,
    /// Receipt of the last accepted registration, shown until dismissed
    pub last_submission: Option<Submission>,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Field under focus, or `None` when the Register button is focused
    pub fn active_field(&self) -> Option<Field> {
        Field::from_index(self.active_form_field)
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_form_field == SUBMIT_BUTTON_INDEX
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.set_active_form_field((self.active_form_field + 1) % FOCUS_STOPS);
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.set_active_form_field(FOCUS_STOPS - 1);
        } else {
            self.set_active_form_field(self.active_form_field - 1);
        }
    }

    /// Focus a stop; the field losing focus is blurred
    pub fn set_active_form_field(&mut self, index: usize) {
        let index = index.min(FOCUS_STOPS - 1);
        if index == self.active_form_field {
            return;
        }
        if let Some(field) = self.active_field() {
            self.form.blur_field(field);
        }
        self.active_form_field = index;
    }

    /// Handle character input in form
    pub fn form_input_char(&mut self, c: char) {
        let Some(field) = self.active_field() else {
            return;
        };
        match field {
            Field::Country => {
                if c == ' ' {
                    self.cycle_country(true);
                }
            }
            Field::Terms => {
                if c == ' ' {
                    self.toggle_terms();
                }
            }
            _ => {
                let mut value = self.form.values().text(field).to_string();
                value.push(c);
                self.form.change(FieldInput::text(field, value));
            }
        }
    }

    /// Handle backspace in form
    pub fn form_backspace(&mut self) {
        let Some(field) = self.active_field().filter(|f| f.accepts_text()) else {
            return;
        };
        let mut value = self.form.values().text(field).to_string();
        if value.pop().is_some() {
            self.form.change(FieldInput::text(field, value));
        }
    }

    /// Step the country select through its options, including the empty placeholder
    pub fn cycle_country(&mut self, forward: bool) {
        let current = Country::from_label(&self.form.values().country);
        let next = if forward {
            Country::cycle_next(current)
        } else {
            Country::cycle_prev(current)
        };
        let label = next.map(Country::label).unwrap_or_default();
        self.form.change(FieldInput::text(Field::Country, label));
    }

    pub fn toggle_terms(&mut self) {
        let checked = !self.form.values().terms;
        self.form.change(FieldInput::checkbox(Field::Terms, checked));
    }

    /// Submit the form. Failing fields report through their inline errors only.
    pub fn submit_form(&mut self, handler: &mut dyn SubmissionHandler) -> SubmitOutcome {
        let outcome = self.form.submit(handler);
        if let SubmitOutcome::Accepted(submission) = &outcome {
            self.last_submission = Some(submission.clone());
            self.status_message = None;
            self.active_form_field = 0;
        }
        outcome
    }

    /// Whether the success dialog is showing
    pub fn has_dialog(&self) -> bool {
        self.last_submission.is_some()
    }

    pub fn dismiss_dialog(&mut self) {
        self.last_submission = None;
    }
}
