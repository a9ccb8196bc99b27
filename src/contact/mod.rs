// SPDX-License-Identifier: MPL-2.0
//! Contact form controller.
//!
//! Collects four text fields and drives the submission status:
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ Success ──reset delay──▶ Idle
//!   ▲                 │
//!   │                 └──err──▶ Error (sticky until the next submit)
//!   └── validation failure ──▶ Error
//! ```
//!
//! The controller is runtime-agnostic. Every asynchronous step (the send,
//! the reset timer) is identified by a [`Ticket`]; completions carrying a
//! ticket that is no longer current are dropped. The iced wrapper in
//! [`crate::ui::contact_form`] turns [`SubmitOutcome::Started`] into a task.

mod error;
mod sender;
pub mod validation;

pub use error::{SubmissionError, ValidationError};
pub use sender::{HttpSender, MessageSender, SimulatedSender};

use serde::Serialize;

/// Shown after a successful send.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";

/// The four inputs of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// Stable lowercase key, matches the JSON payload field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "your@email.com",
            FormField::Subject => "Message subject",
            FormField::Message => "Your message...",
        }
    }
}

/// Current text of every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// JSON body sent to the message endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Submission phase, with the message shown to the user where relevant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl FormStatus {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, FormStatus::Loading)
    }

    /// User-visible message, if the status carries one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Success(msg) | FormStatus::Error(msg) => Some(msg),
            FormStatus::Idle | FormStatus::Loading => None,
        }
    }
}

/// Identifies one pending asynchronous step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

/// What [`ContactForm::submit`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the caller must send `payload` and report back
    /// through [`ContactForm::complete`] with `ticket`.
    Started {
        ticket: Ticket,
        payload: ContactPayload,
    },
    /// Validation failed; status is now `Error`.
    Rejected(ValidationError),
    /// A submission is already in flight.
    Ignored,
}

/// Contact form state machine.
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: FormFields,
    status: FormStatus,
    in_flight: Option<Ticket>,
    pending_reset: Option<Ticket>,
    next_ticket: u64,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    #[must_use]
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    #[must_use]
    pub fn pending_reset(&self) -> Option<Ticket> {
        self.pending_reset
    }

    /// Writes one field. Returns `false` (and changes nothing) while a
    /// submission is loading.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.status.is_loading() {
            return false;
        }
        *self.fields.get_mut(field) = value.into();
        true
    }

    /// Validates the form and, if valid, moves to `Loading`.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status.is_loading() || self.in_flight.is_some() {
            tracing::debug!("submit ignored: a submission is already in flight");
            return SubmitOutcome::Ignored;
        }

        // A new attempt supersedes any success banner still counting down.
        self.pending_reset = None;
        self.status = FormStatus::Loading;

        if let Err(err) = validation::validate(&self.fields) {
            tracing::debug!(%err, "contact form rejected");
            self.status = FormStatus::Error(err.user_message().to_string());
            return SubmitOutcome::Rejected(err);
        }

        let ticket = self.issue_ticket();
        self.in_flight = Some(ticket);
        SubmitOutcome::Started {
            ticket,
            payload: self.fields.to_payload(),
        }
    }

    /// Applies the result of the send identified by `ticket`.
    ///
    /// Returns the ticket of the success-reset timer the caller must arm,
    /// or `None` when nothing needs scheduling (failure or stale ticket).
    pub fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<(), SubmissionError>,
    ) -> Option<Ticket> {
        if self.in_flight != Some(ticket) {
            tracing::debug!(?ticket, "dropping stale submission result");
            return None;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                self.status = FormStatus::Success(SUCCESS_MESSAGE.to_string());
                self.fields = FormFields::default();
                let reset = self.issue_ticket();
                self.pending_reset = Some(reset);
                Some(reset)
            }
            Err(err) => {
                tracing::warn!(%err, "contact submission failed");
                self.status = FormStatus::Error(err.user_message().to_string());
                None
            }
        }
    }

    /// The post-success delay elapsed. Only the current reset ticket
    /// returns the form to `Idle`; errors are never auto-cleared.
    pub fn reset_elapsed(&mut self, ticket: Ticket) {
        if self.pending_reset != Some(ticket) {
            return;
        }
        self.pending_reset = None;
        if matches!(self.status, FormStatus::Success(_)) {
            self.status = FormStatus::Idle;
        }
    }

    /// Invalidates every outstanding ticket. A form abandoned mid-send stays
    /// editable again.
    pub fn cancel_pending(&mut self) {
        if self.in_flight.take().is_some() && self.status.is_loading() {
            self.status = FormStatus::Idle;
        }
        self.pending_reset = None;
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }
}
