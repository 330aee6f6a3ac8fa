use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

/// Credentials posted to `/signin`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInDto {
    pub email: String,
    pub password: String,
}

/// Successful `/signin` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInResponseDto {
    pub token_type: String,
    pub token: String,
    pub id: u32,
    pub role: Role,
}

/// New account posted to `/signup`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub birthday: DateTime<Utc>,
}
