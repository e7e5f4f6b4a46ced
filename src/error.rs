//! Error types
//!
//! Every client operation returns `Result<_, ApiError>`. Local input checks
//! surface as [`ValidationError`] before any request is sent; everything the
//! remote service rejects is reported through the remaining variants.

use thiserror::Error;

/// Missing required input field, detected locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Organization is required")]
    OrganizationRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    /// `.` and `..` would be resolved away by the URL path.
    #[error("Name must not be \".\" or \"..\"")]
    DotSegment,
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Resource not found")]
    NotFound,

    #[error("Unauthorized")]
    Unauthorized,

    /// The service rejected a well-formed request.
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Unauthorized => Some(401),
            ApiError::Remote { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
