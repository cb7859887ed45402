//! Error types for the confplan configuration planner.
//!
//! This module provides the error hierarchy for all planning stages:
//! change-spec loading and validation, running-config parsing, mode
//! selection, and plan assembly.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the confplan planner.
#[derive(Debug, Error)]
pub enum ConfplanError {
    /// Change-spec related errors.
    #[error("Change spec error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration text parse errors.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Match/replace mode selection errors.
    #[error("Mode error: {0}")]
    Mode(#[from] ModeError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Change-spec related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The change-spec file was not found.
    #[error("Change spec file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The change-spec file could not be parsed.
    #[error("Failed to parse change spec: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// Two mutually exclusive input forms were given together.
    #[error("Parameters '{first}' and '{second}' are mutually exclusive")]
    ConflictingInput {
        /// The first of the conflicting parameters.
        first: String,
        /// The second of the conflicting parameters.
        second: String,
    },

    /// Validation failed.
    #[error("Change spec validation failed: {message}")]
    ValidationError {
        /// Description of the validation error.
        message: String,
        /// Field that failed validation.
        field: Option<String>,
    },
}

/// Errors raised while parsing indented configuration text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A line's indentation refers to a nonexistent ancestor context.
    #[error("Line {number} is indented but has no ancestor context: {line:?}")]
    OrphanIndent {
        /// The offending line, trimmed.
        line: String,
        /// 1-based line number within the input.
        number: usize,
    },
}

/// Errors raised when selecting match/replace modes.
#[derive(Debug, Error)]
pub enum ModeError {
    /// Unsupported match mode token.
    #[error("Invalid match mode '{token}'. Valid options: line, strict, exact, none")]
    UnknownMatchMode {
        /// The rejected token.
        token: String,
    },

    /// Unsupported replace mode token.
    #[error("Invalid replace mode '{token}'. Valid options: line, block")]
    UnknownReplaceMode {
        /// The rejected token.
        token: String,
    },
}

/// Result type alias for confplan operations.
pub type Result<T> = std::result::Result<T, ConfplanError>;

impl ConfplanError {
    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl ConfigError {
    /// Creates a conflicting-input error for a pair of parameters.
    #[must_use]
    pub fn conflicting(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::ConflictingInput {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates a validation error for a specific field.
    #[must_use]
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a validation error without a specific field.
    #[must_use]
    pub fn validation_general(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: None,
        }
    }
}
