// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for ocm.
//!
//! Only fatal conditions live here. Problems found in a commit message are
//! not errors: they are collected as [`ValidationIssue`](crate::rules::ValidationIssue)s
//! and reported together.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for ocm operations.
#[derive(Error, Debug)]
pub enum OcmError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // The message failed the policy and the caller did not ask to swallow it
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
///
/// These are never suppressed by `--dont-throw`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("The file with additional verbs could not be read: {path} ({message})")]
    VerbsFileUnreadable { path: PathBuf, message: String },

    #[error("The commit message could not be read from {source_name}: {message}")]
    MessageUnreadable { source_name: String, message: String },
}

/// Outcome of a failed check.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("The commit message has {count} issue(s)")]
    Failed { count: usize },
}

/// Result type alias for ocm operations.
pub type Result<T> = std::result::Result<T, OcmError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| OcmError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
