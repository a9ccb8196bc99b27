// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy for the contact form.
//!
//! Validation errors are recovered locally and shown inline. Submission
//! errors come from the sender collaborator and end up as a generic
//! retry prompt.

use super::FormField;
use std::fmt;

/// Reasons a submission is refused before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The first field found empty (in form order).
    MissingField(FormField),
    /// The email does not have a `local@domain.tld` shape.
    MalformedEmail,
}

impl ValidationError {
    /// Message shown inline above the form.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "Please fill in all fields",
            ValidationError::MalformedEmail => "Please enter a valid email address",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => {
                write!(f, "missing field: {}", field.key())
            }
            ValidationError::MalformedEmail => write!(f, "malformed email"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failures reported by a [`MessageSender`](super::MessageSender).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request never produced a response.
    Network(String),
    /// The endpoint answered with a non-success status code.
    Status(u16),
    /// No answer within the configured timeout.
    Timeout,
}

impl SubmissionError {
    /// Generic retry prompt; the cause is only logged.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        "Failed to send message. Please try again."
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Network(msg) => write!(f, "network error: {msg}"),
            SubmissionError::Status(code) => write!(f, "endpoint returned status {code}"),
            SubmissionError::Timeout => write!(f, "request timed out"),
        }
    }
}

impl std::error::Error for SubmissionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_distinct() {
        let missing = ValidationError::MissingField(FormField::Name).user_message();
        let malformed = ValidationError::MalformedEmail.user_message();
        assert_ne!(missing, malformed);
        assert!(malformed.contains("email"));
    }

    #[test]
    fn submission_errors_share_retry_prompt() {
        assert_eq!(
            SubmissionError::Timeout.user_message(),
            SubmissionError::Status(500).user_message()
        );
        assert!(SubmissionError::Timeout.user_message().contains("try again"));
    }

    #[test]
    fn display_names_the_missing_field() {
        let err = ValidationError::MissingField(FormField::Subject);
        assert_eq!(format!("{err}"), "missing field: subject");
    }
}
