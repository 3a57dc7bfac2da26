use thiserror::Error;

pub use crate::api::error::ApiError;
pub use crate::retake::RetakeError;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
    #[error("Could not determine a data directory; set QUIZ_DATA_DIR")]
    NoDataDir,
}

/// Inline validation failures, shown before any backend call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingCredentials,
    #[error("Please enter a topic.")]
    MissingTopic,
}

/// Fatal start-up errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_messages() {
        assert_eq!(
            FormError::MissingCredentials.to_string(),
            "Please fill in all fields"
        );
        assert_eq!(FormError::MissingTopic.to_string(), "Please enter a topic.");
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::Invalid {
            name: "QUIZ_API_URL",
            reason: "must start with http:// or https://".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for QUIZ_API_URL: must start with http:// or https://"
        );
    }
}
