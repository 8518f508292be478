//! Signup Sinks
//!
//! Where a validated email goes once the form accepts it. The form hands the
//! address off and marks itself submitted without waiting for an answer.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

/// Receiver of validated signup emails
pub trait SignupSink: Send + Sync {
    /// Take ownership of one accepted address
    fn accept(&self, email: &str);
}

impl<F> SignupSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn accept(&self, email: &str) {
        self(email);
    }
}

/// Body posted to a signup endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
}

impl SignupRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

/// Emits an `info` event per accepted email
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl SignupSink for TracingSink {
    fn accept(&self, email: &str) {
        tracing::info!(email, "Email submitted");
    }
}

/// In-memory sink (for development/testing)
#[derive(Debug, Default)]
pub struct MemorySink {
    emails: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted emails, oldest first
    pub fn emails(&self) -> Vec<String> {
        self.emails
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.emails
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SignupSink for MemorySink {
    fn accept(&self, email: &str) {
        self.emails
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(email.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.accept("first@example.com");
        sink.accept("second@example.com");

        assert_eq!(sink.emails(), ["first@example.com", "second@example.com"]);
    }

    #[test]
    fn test_closure_sink() {
        let seen = Mutex::new(String::new());
        let sink = |email: &str| seen.lock().unwrap().push_str(email);

        sink.accept("a@b");
        assert_eq!(*seen.lock().unwrap(), "a@b");
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_tracing_sink_emits_one_info_event() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || TracingSink.accept("a@b"));

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("Email submitted"));
        assert!(lines[0].contains("email=\"a@b\""));
    }

    #[test]
    fn test_request_json_shape() {
        let body = serde_json::to_value(SignupRequest::new("a@b")).unwrap();
        assert_eq!(body, serde_json::json!({ "email": "a@b" }));
    }
}
