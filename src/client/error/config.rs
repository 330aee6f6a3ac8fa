use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required value for {0}")]
    MissingValue(String),
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}
