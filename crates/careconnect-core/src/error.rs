//! Error Types

use thiserror::Error;

/// Result type alias for signup operations
pub type Result<T> = std::result::Result<T, SignupError>;

const EMPTY_EMAIL: &str = "Please enter your email address";
const INVALID_FORMAT: &str = "Please enter a valid email address";

/// Validation failures raised by a signup submit.
///
/// The `Display` text is the exact message shown inline under the form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    /// Nothing was typed into the email field
    #[error("{}", EMPTY_EMAIL)]
    EmptyEmail,

    /// The email field has no `@`
    #[error("{}", INVALID_FORMAT)]
    InvalidFormat,
}

impl SignupError {
    /// Message rendered in the inline alert
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::EmptyEmail => EMPTY_EMAIL,
            Self::InvalidFormat => INVALID_FORMAT,
        }
    }
}

/// Site configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Endpoint is neither an absolute http(s) URL nor a root-relative path
    #[error("Invalid signup endpoint: {0}")]
    InvalidEndpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_user_message() {
        for err in [SignupError::EmptyEmail, SignupError::InvalidFormat] {
            assert_eq!(err.to_string(), err.user_message());
        }
        assert_eq!(SignupError::EmptyEmail.to_string(), "Please enter your email address");
        assert_eq!(SignupError::InvalidFormat.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidEndpoint("ftp://x".into());
        assert_eq!(err.to_string(), "Invalid signup endpoint: ftp://x");
    }
}
