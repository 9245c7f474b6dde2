//! Error types for DSN parsing operations.

use thiserror::Error;

/// Errors that can occur while parsing a DSN or fetching one from the
/// environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DsnError {
    /// The input is not a parseable DSN. Carries the offending input and a
    /// human-readable reason (missing scheme terminator, bad port, or a
    /// failure reported by a custom result type).
    #[error("malformed DSN {dsn:?}: {reason}")]
    Malformed {
        /// The original input string.
        dsn: String,
        /// What made it unparseable.
        reason: String,
    },

    /// The named environment variable is absent or empty.
    #[error("environment variable {name:?} is not set or empty")]
    EnvNotFound {
        /// The variable name that was looked up.
        name: String,
    },
}

impl DsnError {
    /// Build a [`DsnError::Malformed`] for the given input.
    pub fn malformed(dsn: impl Into<String>, reason: impl Into<String>) -> Self {
        DsnError::Malformed {
            dsn: dsn.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`DsnError::EnvNotFound`] for the given variable name.
    pub fn env_not_found(name: impl Into<String>) -> Self {
        DsnError::EnvNotFound { name: name.into() }
    }
}
