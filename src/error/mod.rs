//! Unified error type for edgecopy
//!
//! The transform itself only ever fails with a configuration error (an
//! unsupported copy direction). The remaining variants belong to the
//! collaborators shipped alongside it: the JSON-lines reader/writer and the
//! local job runner.

use std::fmt::Display;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, EdgeCopyError>;

#[derive(Error, Debug)]
pub enum EdgeCopyError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config { code: u16, message: String },

    #[error("[E{code:04}] I/O error: {message}")]
    Io {
        code: u16,
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("[E{code:04}] Serialization error{}: {message}", line_suffix(.line))]
    Serialization {
        code: u16,
        message: String,
        line: Option<usize>,
        #[source]
        source: serde_json::Error,
    },

    #[error("[E{code:04}] Task error: {message}")]
    Task { code: u16, message: String },
}

impl EdgeCopyError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
        }
    }

    /// Wrap an I/O failure
    pub fn io(code: u16, message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            code,
            message: message.into(),
            source,
        }
    }

    /// Wrap a JSON failure, optionally anchored to an input line
    pub fn serialization(
        code: u16,
        message: impl Into<String>,
        line: Option<usize>,
        source: serde_json::Error,
    ) -> Self {
        Self::Serialization {
            code,
            message: message.into(),
            line,
            source,
        }
    }

    /// Create a task error with specific code
    pub fn task(code: u16, message: impl Into<String>) -> Self {
        Self::Task {
            code,
            message: message.into(),
        }
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Io { message, .. }
            | Self::Serialization { message, .. }
            | Self::Task { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Io { code, .. }
            | Self::Serialization { code, .. }
            | Self::Task { code, .. } => *code,
        }
    }

    /// True for errors raised while validating configuration
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } | Self::Serialization { .. } => 4,
            Self::Task { .. } => 5,
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(l) => format!(" at line {l}"),
        None => String::new(),
    }
}

impl From<toml::de::Error> for EdgeCopyError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_PARSE_ERROR, err.to_string())
    }
}

impl From<tokio::task::JoinError> for EdgeCopyError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_cancelled() {
            Self::task(ErrorCode::TASK_CANCELLED, err.to_string())
        } else {
            Self::task(ErrorCode::TASK_PANICKED, err.to_string())
        }
    }
}
