//! # Command Error Handling
//!
//! This module provides error handling utilities for cicsctl CLI commands
//! using the handled crate for consistent error property extraction.

use handled::Handle;

use crate::error::CmciError;
use crate::profile::ProfileError;

/// User-friendly error information that can be extracted from various error types
#[derive(Debug, Clone)]
pub struct UserError {
    /// The main error message to display to the user
    pub message: String,
    /// Optional usage hint to help the user correct the error
    pub usage_hint: Option<String>,
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Implements Handle<UserError> for itself to allow extraction
impl Handle<UserError> for UserError {
    fn handle(&self) -> Option<UserError> {
        Some(self.clone())
    }
}

impl Handle<UserError> for CmciError {
    fn handle(&self) -> Option<UserError> {
        let usage_hint = match self {
            CmciError::MissingParameter { .. } | CmciError::BlankParameter { .. } => Some(
                "Supply the parameter via its command option or connection profile.".to_string(),
            ),
            CmciError::Request { .. } => Some(
                "Verify the host, port, credentials, and region name, and that the CMCI interface is active."
                    .to_string(),
            ),
            CmciError::Client { .. } => None,
        };
        Some(UserError {
            message: self.to_string(),
            usage_hint,
        })
    }
}

impl Handle<UserError> for ProfileError {
    fn handle(&self) -> Option<UserError> {
        let usage_hint = match self {
            ProfileError::NotFound { .. } => Some(format!(
                "Create the profile file in the profile directory or set ${}.",
                crate::profile::PROFILE_DIR_ENV
            )),
            _ => None,
        };
        Some(UserError {
            message: self.to_string(),
            usage_hint,
        })
    }
}

/// Enhanced error formatting for CLI output
pub fn format_cli_error<E>(error: &E, context: &str) -> String
where
    E: Handle<UserError> + std::fmt::Display,
{
    if let Some(user_error) = error.handle() {
        let mut output = format!("{}: {}", context, user_error.message);
        if let Some(hint) = user_error.usage_hint {
            output.push_str(&format!("\nHint: {}", hint));
        }
        output
    } else {
        format!("{}: {}", context, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmci_validation_errors_hint_at_options() {
        let err = CmciError::MissingParameter {
            label: "CICS Program name",
        };
        let user_error = err.handle().unwrap();
        assert_eq!(user_error.message, "CICS Program name is required");
        assert!(user_error.usage_hint.unwrap().contains("profile"));
    }

    #[test]
    fn format_cli_error_appends_hint() {
        let err = CmciError::request("connection refused");
        let formatted = format_cli_error(&err, "Failed to define program");
        assert!(formatted.starts_with("Failed to define program: "));
        assert!(formatted.contains("Hint:"));
    }
}
