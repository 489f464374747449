use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by a geocoding provider. The message is surfaced
    /// verbatim in `Validation error: <message>` reasons.
    #[error("{message}")]
    Provider { message: String },
}

impl ValidatorError {
    pub fn provider(message: impl Into<String>) -> Self {
        ValidatorError::Provider {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_message_is_verbatim() {
        let err = ValidatorError::provider("Google Geocoding API error: OVER_QUERY_LIMIT");
        assert_eq!(err.to_string(), "Google Geocoding API error: OVER_QUERY_LIMIT");
    }

    #[test]
    fn test_config_and_toml_errors_are_prefixed() {
        let err = ValidatorError::Config("PORT must be a valid port number, got 'abc'".to_string());
        assert_eq!(err.to_string(), "Configuration error: PORT must be a valid port number, got 'abc'");

        let toml_err: ValidatorError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(toml_err.to_string().starts_with("TOML deserialization failed:"));
    }
}
