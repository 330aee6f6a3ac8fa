use crate::client::error::ConfigError;

/// API base URL used when `PALM_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const API_URL_VAR: &str = "PALM_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Palm backend, without a trailing `/`.
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads configuration baked in at build time.
    ///
    /// The browser has no process environment, so `PALM_API_URL` is captured by the compiler.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_api_url(option_env!("PALM_API_URL"))
    }

    pub fn from_api_url(api_url: Option<&str>) -> Result<Self, ConfigError> {
        let Some(api_url) = api_url else {
            return Ok(Self::default());
        };

        let api_url = api_url.trim().trim_end_matches('/');
        if api_url.is_empty() {
            return Err(ConfigError::MissingValue(API_URL_VAR.to_string()));
        }
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                var: API_URL_VAR.to_string(),
                reason: format!("{api_url:?} must start with http:// or https://"),
            });
        }

        Ok(Self {
            api_url: api_url.to_string(),
        })
    }

    /// Joins an API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the fallback when no URL is configured.
    ///
    /// Expected: the default local backend URL
    #[test]
    fn defaults_without_value() {
        let config = Config::from_api_url(None).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    /// Tests trimming of the trailing slash so endpoints join cleanly.
    ///
    /// Expected: `https://api.palm.test/users`
    #[test]
    fn trims_trailing_slash() {
        let config = Config::from_api_url(Some("https://api.palm.test/")).unwrap();
        assert_eq!(config.endpoint("/users"), "https://api.palm.test/users");
    }

    /// Tests rejecting a URL without a scheme.
    ///
    /// Expected: Err(ConfigError::InvalidValue)
    #[test]
    fn rejects_missing_scheme() {
        let result = Config::from_api_url(Some("api.palm.test"));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    /// Tests rejecting a blank value.
    ///
    /// Expected: Err(ConfigError::MissingValue)
    #[test]
    fn rejects_blank_value() {
        let result = Config::from_api_url(Some("  "));
        assert_eq!(
            result,
            Err(ConfigError::MissingValue("PALM_API_URL".to_string()))
        );
    }
}
