//! CLI error types for structured error handling.
//!
//! Startup failures map to specific exit codes. Errors raised while the
//! session is running never reach this type: the session reports them and
//! keeps going.

use std::fmt;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (explicit config path)
    NotFound { message: String, hint: String },

    /// Invalid user input or configuration
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Config not found", "Hint: unset FLASHDECK_CONFIG");
        assert_eq!(
            err.to_string(),
            "Config not found\nHint: unset FLASHDECK_CONFIG"
        );
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_invalid_input_exit_code() {
        let err = CliError::invalid_input("bad config");
        assert_eq!(err.to_string(), "bad config");
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }
}
