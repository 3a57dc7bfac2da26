use reqwest::StatusCode;
use thiserror::Error;

pub const FALLBACK_MESSAGE: &str = "API Error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Shown to the user verbatim.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Builds the error for a non-2xx response, preferring the body's `detail`, then its
    /// `error`, then a generic message.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        ApiError::Status {
            status,
            message: extract_message(body),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            ApiError::Decode(_) => None,
        }
    }
}

fn extract_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return FALLBACK_MESSAGE.to_string();
    };

    ["detail", "error"]
        .iter()
        .filter_map(|key| value.get(*key))
        .find_map(|field| match field {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            serde_json::Value::Null => None,
            serde_json::Value::String(_) => None,
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_takes_precedence() {
        let err = ApiError::from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"detail": "Given token not valid", "error": "ignored"}"#,
        );
        assert_eq!(err.to_string(), "Given token not valid");
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_error_field_used_without_detail() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error": "username already exists"}"#,
        );
        assert_eq!(err.to_string(), "username already exists");
    }

    #[test]
    fn test_fallback_for_non_json_body() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>502</html>");
        assert_eq!(err.to_string(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_fallback_for_empty_object() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "{}");
        assert_eq!(err.to_string(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_non_string_detail_is_rendered() {
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"detail": ["bad"]}"#);
        assert_eq!(err.to_string(), r#"["bad"]"#);
    }
}
