//! Error types for the Onfido client
//!
//! Every public operation returns `Result<T, Error>`. Errors fall into four
//! classes: transport, API, decode and configuration. Nothing in the crate
//! retries; each error is handed back to the caller as-is.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The main error type for the Onfido client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// Network or protocol failure reported by the HTTP client
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The context was cancelled before the response arrived
    #[error("Request cancelled")]
    Cancelled,

    /// The context deadline or the client timeout expired
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Milliseconds waited before giving up
        timeout_ms: u64,
    },

    /// A request path or endpoint could not be parsed as a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request could not be built, e.g. its body failed to serialize
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request
        message: String,
    },

    // ============================================================================
    // API Errors
    // ============================================================================
    /// The server answered with a non-success status
    #[error("{0}")]
    Api(ApiError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    /// A success response whose body does not have the expected shape
    #[error("Malformed response (HTTP {status}): {message}")]
    Decode {
        /// HTTP status of the response
        status: u16,
        /// Parser error
        message: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid client configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// A required setting was not provided
    #[error("Missing required config field: {field}")]
    MissingConfigField {
        /// Name of the setting
        field: String,
    },
}

impl Error {
    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        Self::Decode {
            status,
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// True for network failures, cancellation and bad request construction
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::Cancelled
                | Error::Timeout { .. }
                | Error::InvalidUrl(_)
                | Error::InvalidRequest { .. }
        )
    }

    /// True when the server answered with a non-success status
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    /// True when a success response could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// HTTP status associated with this error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(api) => Some(api.status),
            Error::Decode { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The decoded server error, if any
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(api),
            _ => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

/// Result type alias for the Onfido client
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// API Error
// ============================================================================

/// Error returned by the API for a non-2xx response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Server-assigned error id
    pub id: Option<String>,
    /// Machine-readable error type (e.g. `validation_error`)
    pub error_type: Option<String>,
    /// Human-readable message
    pub message: String,
    /// Offending fields as supplied by the server: usually an object of
    /// per-field messages, sometimes a list of names. `Null` when absent.
    pub fields: Value,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "type", default)]
    error_type: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    fields: Value,
}

impl ApiError {
    /// Build an API error from a non-success status and its raw body.
    ///
    /// Bodies that do not match the `{"error": {...}}` envelope still produce
    /// an error carrying the status and the raw text as message.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => Self {
                status,
                id: envelope.error.id,
                error_type: envelope.error.error_type,
                message: envelope.error.message.unwrap_or_default(),
                fields: envelope.error.fields,
            },
            Err(_) => Self::synthesized(status, String::from_utf8_lossy(body).trim()),
        }
    }

    /// Error carrying only a status and a best-effort message
    pub fn synthesized(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            id: None,
            error_type: None,
            message: message.into(),
            fields: Value::Null,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_type {
            Some(kind) => write!(f, "API error (HTTP {}, {kind}): {}", self.status, self.message),
            None => write!(f, "API error (HTTP {}): {}", self.status, self.message),
        }
    }
}

impl std::error::Error for ApiError {}
