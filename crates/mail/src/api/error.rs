//! Typed backend failures

use super::Method;

/// Failure talking to the backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status where a body was required
    #[error("{method} {path} returned HTTP {status}")]
    Status {
        method: Method,
        path: String,
        status: u16,
    },

    /// The backend could not be reached
    #[error("Backend unreachable: {method} {path}")]
    Offline { method: Method, path: String },
}

impl ApiError {
    /// HTTP status, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Offline { .. } => None,
        }
    }
}
