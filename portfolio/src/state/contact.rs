//! Contact form fields, submission status, and the delivery seam.
//!
//! Submission is split in two so the component can put the simulated latency
//! between the halves:
//!
//! ```text
//! begin_submit()  -> is_submitting = true, form snapshot handed out
//! ... delay ...
//! sink.deliver(&snapshot)
//! finish_submit(result) -> message set, fields cleared on success,
//!                          is_submitting = false
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Input `name` attributes of the form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub const fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct ParseFieldError(pub String);

impl FromStr for ContactField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("failed to encode contact payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("delivery failed: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Replaces one field, leaving the others as they are.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_payload(&self) -> Result<String, SubmitError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// How a settled submission is reported to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure,
}

impl SubmitOutcome {
    pub const fn message(self) -> &'static str {
        match self {
            SubmitOutcome::Success => SUCCESS_MESSAGE,
            SubmitOutcome::Failure => FAILURE_MESSAGE,
        }
    }

    /// Messages are told apart by content, so anything thanking the visitor
    /// counts as success.
    pub fn classify(message: &str) -> Self {
        if message.contains("Thank you") {
            SubmitOutcome::Success
        } else {
            SubmitOutcome::Failure
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionStatus {
    pub is_submitting: bool,
    /// Last settled message. Stays visible while a resubmission is in flight.
    pub submit_message: Option<String>,
}

impl SubmissionStatus {
    pub fn outcome(&self) -> Option<SubmitOutcome> {
        self.submit_message.as_deref().map(SubmitOutcome::classify)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub status: SubmissionStatus,
}

impl ContactFormState {
    pub fn handle_change(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting
    }

    /// Enters the submitting state and returns the form as it was sent.
    ///
    /// Only refused while another submission is pending. Field contents are
    /// left to the browser's `required` check and sent as typed.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitError> {
        if self.status.is_submitting {
            return Err(SubmitError::AlreadySubmitting);
        }

        self.status.is_submitting = true;
        tracing::debug!("contact submission started");
        Ok(self.form.clone())
    }

    /// Settles the pending submission. Fields are cleared only on success so
    /// a failed attempt can be resent as is.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        let outcome = match result {
            Ok(()) => {
                self.form.clear();
                tracing::info!("contact submission delivered");
                SubmitOutcome::Success
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                SubmitOutcome::Failure
            }
        };
        self.status.submit_message = Some(outcome.message().to_string());
        self.status.is_submitting = false;
        outcome
    }
}

/// Where a submitted form goes.
pub trait ContactSink {
    fn deliver(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

/// Stand-in until a real endpoint exists: encodes the payload, logs it and
/// reports success. Nothing leaves the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSink;

impl ContactSink for SimulatedSink {
    fn deliver(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let payload = form.to_payload()?;
        tracing::debug!(%payload, "simulated contact delivery");
        Ok(())
    }
}
