//! AccessGrid API error types.

use auth::AuthError;
use common::ParseEndpointError;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Message used for HTTP 401 responses.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Message used for HTTP 402 responses.
pub const INSUFFICIENT_BALANCE: &str = "Insufficient account balance";

/// Message used when a failed response carries no `message` field.
pub const REQUEST_FAILED: &str = "Request failed";

/// Errors returned by the AccessGrid client.
///
/// `Authentication` and `Api` are the only variants a request can produce.
/// `Config` and `Endpoint` come from client construction.
#[derive(Debug, Error)]
pub enum AccessGridError {
    /// The service rejected the account id or signature (HTTP 401).
    #[error("{message}")]
    Authentication {
        /// Human-readable message.
        message: String,
    },

    /// Any other failed request.
    ///
    /// `status` is set when the service answered; transport, JSON and
    /// signing failures leave it empty and keep the underlying error as
    /// `source`.
    #[error("{message}")]
    Api {
        /// Human-readable message.
        message: String,
        /// HTTP status, if a response was received.
        status: Option<u16>,
        /// The lower-level failure this error wraps.
        #[source]
        source: Option<BoxError>,
    },

    /// Invalid credentials supplied at construction.
    #[error(transparent)]
    Config(#[from] AuthError),

    /// Invalid base URL supplied at construction.
    #[error(transparent)]
    Endpoint(#[from] ParseEndpointError),
}

impl AccessGridError {
    /// A 401 error with the default message.
    pub fn authentication() -> Self {
        Self::Authentication {
            message: INVALID_CREDENTIALS.to_string(),
        }
    }

    /// An error for a failed HTTP status.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            status: Some(status),
            source: None,
        }
    }

    /// Wrap a lower-level failure as a generic API error.
    ///
    /// The message embeds the underlying error's message.
    pub fn wrap<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Api {
            message: format!("{REQUEST_FAILED}: {err}"),
            status: None,
            source: Some(Box::new(err)),
        }
    }

    /// Classify a non-2xx response.
    ///
    /// `body` is the parsed response body, if it was valid JSON.
    pub fn from_response(status: u16, body: Option<&serde_json::Value>) -> Self {
        match status {
            401 => Self::authentication(),
            402 => Self::status(402, INSUFFICIENT_BALANCE),
            _ => {
                let message = body
                    .and_then(|b| b.get("message"))
                    .and_then(|m| m.as_str())
                    .unwrap_or(REQUEST_FAILED);
                Self::status(status, message)
            }
        }
    }

    /// HTTP status of the failed response, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if the service rejected the credentials.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Check if the account has insufficient balance for the operation.
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, Self::Api { status: Some(402), .. })
    }
}
