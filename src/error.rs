//! Error type shared by the API layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response, or the body could not be decoded.
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// The server answered with a non-success status.
    #[error("Request to {path} failed with status {status}")]
    Status { path: String, status: u16 },

    #[error("Login failed")]
    LoginFailed,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::Status {
            path: "/summary/".to_string(),
            status: 401,
        };
        assert_eq!(err.to_string(), "Request to /summary/ failed with status 401");
        assert_eq!(err.status(), Some(401));
        assert_eq!(ApiError::LoginFailed.status(), None);
    }
}
