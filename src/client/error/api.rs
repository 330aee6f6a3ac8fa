use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Request(String),
    #[error("Your session is missing or has expired, please sign in again")]
    Unauthorized,
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Requests to the Palm API are only available on the web platform")]
    Unsupported,
}

impl ApiError {
    /// Builds the error for a non-success response.
    ///
    /// Uses the backend's `{"error": "..."}` message when the body has one and falls back to
    /// the raw body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }

        let message = match serde_json::from_str::<ErrorDto>(body) {
            Ok(error_dto) => error_dto.error,
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        };

        Self::Status { status, message }
    }
}
