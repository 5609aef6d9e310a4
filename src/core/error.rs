//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ProfileDirError`] which covers every failure mode of the
//! profile-directory core and its adapters. It uses `thiserror` for ergonomic error
//! definitions and includes constructors for the common failure scenarios.
//!
//! # Public API
//! - [`ProfileDirError`]: Main error enum covering all failure modes
//! - [`ErrorKind`]: Coarse classification used by callers deciding whether to retry
//! - [`FailureInfo`]: Clonable error descriptor kept inside state snapshots
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ProfileDirError>`
//!
//! # Error Categories
//! - **Remote calls**: network failures, non-success statuses, malformed payloads
//! - **Persistence**: key-value store reads and writes
//! - **Geocoding**: address lookups that produced no coordinates
//! - **Session**: missing or rejected credentials

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Domain-specific error types for profile-directory
#[derive(Error, Debug)]
pub enum ProfileDirError {
    // Remote call errors
    #[error("Network request failed: {message}")]
    NetworkFailure { message: String },

    #[error("Unexpected response: {message}")]
    BadResponse { message: String },

    // Persistence errors
    #[error("Storage unavailable for key '{key}': {message}")]
    StorageUnavailable { key: String, message: String },

    // Geocoding errors
    #[error("Lookup failed for '{address}': {reason}")]
    LookupFailed { address: String, reason: String },

    // Session errors
    #[error("Not signed in. Run 'profile-directory login' first.")]
    NotLoggedIn,

    #[error("Sign in failed: {message}")]
    InvalidCredentials { message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Failure already absorbed into a loader's state and now surfaced to the user
    #[error("{0}")]
    Reported(FailureInfo),
}

/// Convenience type alias for Results using ProfileDirError
pub type Result<T> = std::result::Result<T, ProfileDirError>;

/// Coarse error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    NetworkFailure,
    BadResponse,
    StorageUnavailable,
    LookupFailed,
    Session,
    Other,
}

/// Clonable description of a failed operation, stored in loader state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for FailureInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&ProfileDirError> for FailureInfo {
    fn from(err: &ProfileDirError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl ProfileDirError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NetworkFailure { .. } => ErrorKind::NetworkFailure,
            Self::BadResponse { .. } | Self::Json(_) => ErrorKind::BadResponse,
            Self::StorageUnavailable { .. } => ErrorKind::StorageUnavailable,
            Self::LookupFailed { .. } => ErrorKind::LookupFailed,
            Self::NotLoggedIn | Self::InvalidCredentials { .. } => ErrorKind::Session,
            Self::Config { .. } | Self::Io(_) => ErrorKind::Other,
            Self::Reported(info) => info.kind,
        }
    }

    /// Create a network failure error
    pub fn network_failure(message: impl Into<String>) -> Self {
        Self::NetworkFailure {
            message: message.into(),
        }
    }

    /// Create a bad response error
    pub fn bad_response(message: impl Into<String>) -> Self {
        Self::BadResponse {
            message: message.into(),
        }
    }

    /// Create a bad response error for a non-success HTTP status
    pub fn bad_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        if body.is_empty() {
            Self::bad_response(format!("HTTP {status}"))
        } else {
            Self::bad_response(format!("HTTP {status}: {body}"))
        }
    }

    /// Create a storage unavailable error
    pub fn storage_unavailable(key: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::StorageUnavailable {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Create a lookup failed error
    pub fn lookup_failed(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LookupFailed {
            address: address.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ProfileDirError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::bad_response(err.to_string())
        } else if let Some(status) = err.status() {
            Self::bad_status(status.as_u16(), "")
        } else {
            Self::network_failure(err.to_string())
        }
    }
}
