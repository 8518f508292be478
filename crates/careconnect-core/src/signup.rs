//! Signup Form State
//!
//! Holds what the user typed, the last validation failure and whether the
//! form has been accepted. Once accepted, the form stays accepted.

use crate::error::{Result, SignupError};
use crate::sink::SignupSink;

/// Which panel the signup card shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupPanel {
    /// Input, button, inline error and privacy note
    Form,
    /// Thank-you card
    Confirmation,
}

/// Check an address the way the form does: present, and containing `@`.
///
/// This is not RFC 5322 validation.
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(SignupError::EmptyEmail);
    }
    if !email.contains('@') {
        return Err(SignupError::InvalidFormat);
    }
    Ok(())
}

/// State owned by the signup card
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    email: String,
    error: Option<SignupError>,
    submitted: bool,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input text, exactly as typed
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Failure from the last rejected submit, if not cleared since
    pub const fn error(&self) -> Option<SignupError> {
        self.error
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(SignupError::user_message)
    }

    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub const fn panel(&self) -> SignupPanel {
        if self.submitted {
            SignupPanel::Confirmation
        } else {
            SignupPanel::Form
        }
    }

    /// Replace the input text. Leaves any error message in place.
    pub fn update_email(&mut self, text: impl Into<String>) {
        self.email = text.into();
    }

    /// Validate and, on success, hand the email to `sink`.
    ///
    /// A failure is stored for display and returned; the typed text is kept
    /// so it can be corrected. Submitting an already accepted form does
    /// nothing.
    pub fn submit(&mut self, sink: &dyn SignupSink) -> Result<()> {
        if self.submitted {
            return Ok(());
        }

        if let Err(err) = validate_email(&self.email) {
            tracing::debug!(error = %err, "signup rejected");
            self.error = Some(err);
            return Err(err);
        }

        sink.accept(&self.email);
        self.submitted = true;
        self.error = None;
        tracing::debug!("signup accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn form_with(email: &str) -> SignupForm {
        let mut form = SignupForm::new();
        form.update_email(email);
        form
    }

    #[test]
    fn test_initial_state() {
        let form = SignupForm::new();
        assert_eq!(form.email(), "");
        assert_eq!(form.error(), None);
        assert!(!form.is_submitted());
        assert_eq!(form.panel(), SignupPanel::Form);
    }

    #[test]
    fn test_empty_email_rejected() {
        let sink = MemorySink::new();
        let mut form = SignupForm::new();

        assert_eq!(form.submit(&sink), Err(SignupError::EmptyEmail));
        assert_eq!(form.error_message(), Some("Please enter your email address"));
        assert!(!form.is_submitted());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_missing_at_rejected() {
        let sink = MemorySink::new();
        let mut form = form_with("not-an-email");

        assert_eq!(form.submit(&sink), Err(SignupError::InvalidFormat));
        assert_eq!(form.error_message(), Some("Please enter a valid email address"));
        assert_eq!(form.email(), "not-an-email");
        assert!(!form.is_submitted());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_valid_email_emitted_once() {
        let sink = MemorySink::new();
        let mut form = form_with("a@b");

        assert_eq!(form.submit(&sink), Ok(()));
        assert_eq!(form.error(), None);
        assert!(form.is_submitted());
        assert_eq!(sink.emails(), ["a@b"]);
    }

    #[test]
    fn test_error_survives_typing_and_clears_on_success() {
        let sink = MemorySink::new();
        let mut form = form_with("nope");
        let _ = form.submit(&sink);

        form.update_email("nope@");
        assert_eq!(form.error(), Some(SignupError::InvalidFormat));

        form.submit(&sink).unwrap();
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_empty_checked_before_format() {
        assert_eq!(validate_email(""), Err(SignupError::EmptyEmail));
        assert_eq!(validate_email(" "), Err(SignupError::InvalidFormat));
        assert_eq!(validate_email("@"), Ok(()));
    }

    #[test]
    fn test_submitted_is_terminal() {
        let sink = MemorySink::new();
        let mut form = form_with("a@b");
        form.submit(&sink).unwrap();

        form.update_email("");
        assert_eq!(form.submit(&sink), Ok(()));
        assert_eq!(form.panel(), SignupPanel::Confirmation);
        assert_eq!(form.error(), None);
        assert_eq!(sink.len(), 1);
    }
}
