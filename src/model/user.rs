use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::auth::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(alias = "ID")]
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birthday: DateTime<Utc>,
    pub role: Role,
}

impl UserDto {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
