//! Task service error types.

/// Errors that can occur while talking to the task service.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Transport failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to deserialize service response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl RemoteError {
    /// Return the HTTP status for service-side failures.
    ///
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Api { status, .. } => Some(*status),
            RemoteError::HttpRequest(e) => e.status().map(|s| s.as_u16()),
            RemoteError::Deserialization(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_api() {
        let error = RemoteError::Api {
            status: 404,
            message: "Task not found".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Task not found"));
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_remote_error_deserialization() {
        let json_error = serde_json::from_str::<u64>("nope").unwrap_err();
        let error: RemoteError = json_error.into();
        assert!(error.to_string().contains("deserialize"));
        assert_eq!(error.status(), None);
    }
}
