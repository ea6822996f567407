//! Error types for expection.
//!
//! Failures routed through a policy belong to the caller's own error types;
//! the only error this crate defines itself is for naming a policy.

use thiserror::Error;

/// Errors produced while parsing a [`Policy`](crate::Policy) name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePolicyError {
    /// The name is neither `exceptions` nor `expected`.
    #[error("Unknown error policy '{value}' (expected 'exceptions' or 'expected')")]
    Unknown {
        /// The rejected input.
        value: String,
    },
}

impl ParsePolicyError {
    /// Creates an unknown-policy error for `value`.
    #[must_use]
    pub fn unknown(value: impl Into<String>) -> Self {
        Self::Unknown {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_policy_message() {
        let err = ParsePolicyError::unknown("abort");
        let msg = format!("{err}");
        assert!(msg.contains("'abort'"));
        assert!(msg.contains("exceptions"));
        assert!(msg.contains("expected"));
    }

    #[test]
    fn test_unknown_policy_equality() {
        assert_eq!(
            ParsePolicyError::unknown("x"),
            ParsePolicyError::Unknown {
                value: "x".to_string()
            }
        );
    }
}
