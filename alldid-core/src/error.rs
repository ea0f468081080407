//! Error taxonomy shared by the dispatcher and every naming service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Service name used for errors raised by the dispatcher itself.
pub const DISPATCHER_SERVICE: &str = "alldid";

/// Unified error type for all naming service operations.
///
/// The set is closed: adapters translate their backend's native failures into
/// one of these variants at their boundary, so callers never inspect
/// adapter-specific error types. Every variant carries the `service` that
/// produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum AllDidError {
    /// No installed service matches the name's syntax.
    #[error("[{service}] {name} is not supported")]
    DidIsNotSupported {
        /// Service that rejected the name.
        service: String,
        /// The queried name.
        name: String,
    },

    /// The name is syntactically valid but has no current registration.
    #[error("[{service}] {name} is not registered")]
    UnregisteredName {
        /// Service that produced the error.
        service: String,
        /// The queried name.
        name: String,
    },

    /// The queried key has no value, in contexts that treat that as an error.
    #[error("[{service}] Record '{key}' not found on {name}")]
    RecordNotFound {
        /// Service that produced the error.
        service: String,
        /// The queried name.
        name: String,
        /// The queried record key.
        key: String,
    },

    /// The backing system has no equivalent of the requested operation.
    #[error("[{service}] Unsupported method: {method}")]
    UnsupportedMethod {
        /// Service that produced the error.
        service: String,
        /// Operation that is not available.
        method: String,
    },

    /// A caller-supplied argument failed validation.
    #[error("[{service}] Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Service that produced the error.
        service: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Anything else: transport failures, unparseable responses, unmapped
    /// backend error codes.
    #[error("[{service}] {raw_message}")]
    Unknown {
        /// Service that produced the error.
        service: String,
        /// Raw error code from the backend, if available.
        raw_code: Option<String>,
        /// Raw error message.
        raw_message: String,
    },
}

/// The six error kinds, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    DidIsNotSupported,
    UnregisteredName,
    RecordNotFound,
    UnsupportedMethod,
    InvalidParameter,
    Unknown,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DidIsNotSupported => "DidIsNotSupported",
            Self::UnregisteredName => "UnregisteredName",
            Self::RecordNotFound => "RecordNotFound",
            Self::UnsupportedMethod => "UnsupportedMethod",
            Self::InvalidParameter => "InvalidParameter",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AllDidError {
    /// The error raised when no installed service supports `name`.
    pub fn not_supported(name: impl Into<String>) -> Self {
        Self::DidIsNotSupported {
            service: DISPATCHER_SERVICE.to_string(),
            name: name.into(),
        }
    }

    pub fn unsupported_method(service: impl Into<String>, method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            service: service.into(),
            method: method.into(),
        }
    }

    pub fn unregistered(service: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnregisteredName {
            service: service.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DidIsNotSupported { .. } => ErrorCode::DidIsNotSupported,
            Self::UnregisteredName { .. } => ErrorCode::UnregisteredName,
            Self::RecordNotFound { .. } => ErrorCode::RecordNotFound,
            Self::UnsupportedMethod { .. } => ErrorCode::UnsupportedMethod,
            Self::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            Self::Unknown { .. } => ErrorCode::Unknown,
        }
    }

    /// Service that produced the error.
    pub fn service(&self) -> &str {
        match self {
            Self::DidIsNotSupported { service, .. }
            | Self::UnregisteredName { service, .. }
            | Self::RecordNotFound { service, .. }
            | Self::UnsupportedMethod { service, .. }
            | Self::InvalidParameter { service, .. }
            | Self::Unknown { service, .. } => service,
        }
    }

    /// Whether this is expected behavior (bad input, absent name), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        !matches!(self, Self::Unknown { .. })
    }
}

/// Convenience type alias for `Result<T, AllDidError>`.
pub type Result<T> = std::result::Result<T, AllDidError>;
