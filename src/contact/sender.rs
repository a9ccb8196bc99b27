// SPDX-License-Identifier: MPL-2.0
//! Message-send port for the contact form.
//!
//! The form controller never talks to the network itself. It hands a
//! [`ContactPayload`] to a [`MessageSender`] and waits for the result:
//!
//! - [`SimulatedSender`] waits a fixed delay and always succeeds (default)
//! - [`HttpSender`] posts the payload as JSON to a configured endpoint

use super::{ContactPayload, SubmissionError};
use futures_util::future::BoxFuture;
use std::fmt;
use std::time::Duration;

/// Something that can deliver a contact message.
///
/// Implementations must be cheap to share: the UI keeps one behind an `Arc`
/// and clones the future out of it for every submission.
pub trait MessageSender: Send + Sync + fmt::Debug {
    /// Delivers `payload`. The returned future owns everything it needs.
    fn send(&self, payload: ContactPayload) -> BoxFuture<'static, Result<(), SubmissionError>>;
}

// =============================================================================
// SimulatedSender
// =============================================================================

/// Stand-in collaborator: sleeps for `delay`, then reports success.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSender {
    delay: Duration,
}

impl SimulatedSender {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl MessageSender for SimulatedSender {
    fn send(&self, payload: ContactPayload) -> BoxFuture<'static, Result<(), SubmissionError>> {
        let delay = self.delay;
        Box::pin(async move {
            tracing::debug!(subject = %payload.subject, ?delay, "simulating contact submission");
            tokio::time::sleep(delay).await;
            Ok(())
        })
    }
}

// =============================================================================
// HttpSender
// =============================================================================

/// Posts the payload as JSON to `endpoint`.
#[derive(Debug, Clone)]
pub struct HttpSender {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpSender {
    /// Builds a sender for `endpoint` with a per-request `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SubmissionError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MessageSender for HttpSender {
    fn send(&self, payload: ContactPayload) -> BoxFuture<'static, Result<(), SubmissionError>> {
        let request = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&payload);
        let endpoint = self.endpoint.clone();

        Box::pin(async move {
            let response = request.send().await.map_err(map_transport_error)?;
            let status = response.status();
            if status.is_success() {
                tracing::info!(%endpoint, "contact message delivered");
                Ok(())
            } else {
                Err(SubmissionError::Status(status.as_u16()))
            }
        })
    }
}

fn map_transport_error(err: reqwest::Error) -> SubmissionError {
    if err.is_timeout() {
        SubmissionError::Timeout
    } else if let Some(status) = err.status() {
        SubmissionError::Status(status.as_u16())
    } else {
        SubmissionError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        }
    }

    #[tokio::test]
    async fn simulated_sender_always_succeeds() {
        let sender = SimulatedSender::new(Duration::from_millis(5));
        assert_eq!(sender.send(payload()).await, Ok(()));
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_sender_waits_for_its_delay() {
        let sender = SimulatedSender::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        sender.send(payload()).await.expect("simulated send succeeds");
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn http_sender_reports_unreachable_endpoint() {
        // Port 9 (discard) is closed on test machines.
        let sender = HttpSender::new("http://127.0.0.1:9/contact", Duration::from_secs(2))
            .expect("client builds");
        let result = sender.send(payload()).await;
        assert!(
            matches!(
                result,
                Err(SubmissionError::Network(_)) | Err(SubmissionError::Timeout)
            ),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn http_sender_keeps_endpoint() {
        let sender = HttpSender::new("https://example.com/contact", Duration::from_secs(10))
            .expect("client builds");
        assert_eq!(sender.endpoint(), "https://example.com/contact");
    }
}
