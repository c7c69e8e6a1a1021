//! Profile form state coordination
//!
//! `ProfileForm` owns the current values and keeps the error map, the
//! validity flag and the submission phase consistent with them. Every
//! operation runs to completion; outcomes are state, never errors.

use super::field::{FieldName, FieldValue};
use super::values::FormValues;
use crate::validation::{validate_all, validate_field, ErrorMap};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Lifecycle phase of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// A submission was accepted and its confirmation is showing
    Submitted,
}

/// Payload released by an accepted submit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub values: FormValues,
}

impl Submission {
    fn new(values: FormValues) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted(Submission),
    Rejected { error_count: usize },
}

impl SubmitOutcome {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    values: FormValues,
    errors: ErrorMap,
    is_valid: bool,
    phase: FormPhase,
    last_submission: Option<Submission>,
}

impl ProfileForm {
    pub fn new() -> Self {
        let mut form = Self::default();
        form.recompute_validity();
        form
    }

    /// Store a new value for one field and re-run that field's rule
    pub fn apply_field_change(&mut self, field: FieldName, value: impl Into<FieldValue>) {
        let value = value.into();
        self.values.set(field, &value);

        let error = validate_field(field, &self.values);
        tracing::debug!(field = %field, error = ?error, "field changed");
        self.errors.set(field, error);

        self.recompute_validity();
    }

    /// String-keyed entry point. Unknown keys are ignored.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn on_field_change(&mut self, key: &str, value: impl Into<FieldValue>) {
        match key.parse::<FieldName>() {
            Ok(field) => self.apply_field_change(field, value),
            Err(err) => tracing::warn!("Ignoring field change: {err}"),
        }
    }

    /// Full rule pass over the current values.
    ///
    /// Sets the validity flag and drops error entries whose field now passes.
    /// Never adds entries.
    pub fn recompute_validity(&mut self) {
        let full = validate_all(&self.values);
        self.errors.retain(|field| full.contains(field));

        let is_valid = full.is_empty();
        if is_valid != self.is_valid {
            tracing::debug!(is_valid, "form validity changed");
        }
        self.is_valid = is_valid;
    }

    /// Validate everything and, if nothing fails, accept the current values
    pub fn attempt_submit(&mut self) -> SubmitOutcome {
        let errors = validate_all(&self.values);
        self.is_valid = errors.is_empty();

        if errors.is_empty() {
            let submission = Submission::new(self.values.clone());
            tracing::info!(
                id = %submission.id,
                submitted_at = %submission.submitted_at,
                "Form submitted"
            );
            tracing::debug!(values = ?submission.values.redacted(), "Form data");

            self.errors = errors;
            self.phase = FormPhase::Submitted;
            self.last_submission = Some(submission.clone());
            SubmitOutcome::Accepted(submission)
        } else {
            let error_count = errors.len();
            tracing::debug!(error_count, "Submit rejected");
            self.errors = errors;
            SubmitOutcome::Rejected { error_count }
        }
    }

    /// Close the success confirmation; values and errors are kept
    pub fn dismiss_confirmation(&mut self) {
        self.phase = FormPhase::Editing;
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase() == FormPhase::Submitted
    }

    pub fn last_submission(&self) -> Option<&Submission> {
        self.last_submission.as_ref()
    }
}
