use serde::{Deserialize, Serialize};

/// The response body the backend returns when a request fails
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
