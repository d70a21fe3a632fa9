//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Token store rejected a write
    #[error("Token storage error: {0}")]
    Storage(String),

    /// A header could not be built from the given value
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status carried by this error, if the server produced one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::BadRequest(_) => Some(StatusCode::BAD_REQUEST),
            Self::AuthenticationFailed(_) => Some(StatusCode::UNAUTHORIZED),
            Self::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::ServerError { status, .. } => StatusCode::from_u16(*status).ok(),
            Self::Request(err) => err.status(),
            Self::Serialization(_)
            | Self::Configuration(_)
            | Self::Storage(_)
            | Self::InvalidHeader(_) => None,
        }
    }

    /// Whether the server rejected the request's credentials (HTTP 401)
    pub fn is_auth_expired(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_statuses_to_variants() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, "nope".into()),
            ClientError::AuthenticationFailed(m) if m == "nope"
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::FORBIDDEN, String::new()),
            ClientError::Forbidden(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
            ClientError::ServerError { status: 500, .. }
        ));
    }

    #[test]
    fn status_round_trips_for_server_errors() {
        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, String::new());
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert!(!err.is_auth_expired());
    }

    #[test]
    fn only_401_counts_as_expired() {
        assert!(ClientError::AuthenticationFailed(String::new()).is_auth_expired());
        assert!(!ClientError::Forbidden(String::new()).is_auth_expired());
        assert!(!ClientError::Storage("quota".into()).is_auth_expired());
    }
}
