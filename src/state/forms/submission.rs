//! Accepted registrations and the sink that receives them

use super::values::FormValues;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Receipt for a registration that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub values: FormValues,
}

impl Submission {
    pub fn new(values: FormValues) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values,
        }
    }

    /// Short reference shown to the user
    pub fn reference(&self) -> String {
        self.id.simple().to_string()[..8].to_uppercase()
    }

    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.values.first_name.trim(),
            self.values.last_name.trim()
        )
    }
}

/// Side effect run once for every accepted submission
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionHandler {
    fn submitted(&mut self, submission: &Submission);
}

/// Handler that records accepted submissions in the log.
///
/// Only the receipt id and timestamp are logged; field values stay in memory.
#[derive(Debug, Default)]
pub struct LogSubmissionHandler {
    pub accepted: usize,
}

impl SubmissionHandler for LogSubmissionHandler {
    fn submitted(&mut self, submission: &Submission) {
        self.accepted += 1;
        tracing::info!(
            id = %submission.id,
            submitted_at = %submission.submitted_at.to_rfc3339(),
            "registration accepted"
        );
    }
}
