//! Remote access errors.

/// Result type for the REST access layer
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by [`crate::TaskApi`] calls.
///
/// Backend failures are passed through as-is: the status code and body of
/// an error response are kept verbatim so the view can show them.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request never produced a response (backend unreachable, CORS, DNS).
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("HTTP {status} from {url}: {body}")]
    Status { url: String, status: u16, body: String },

    /// A success response whose body is not the expected JSON.
    #[error("Unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// An update was requested for a task the backend has never seen.
    #[error("Task has no id; create it before updating")]
    MissingId,
}

impl ApiError {
    /// HTTP status of an error response, if the backend sent one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Status {
            url: "http://localhost/tasks/".to_string(),
            status: 400,
            body: r#"{"title":["This field may not be blank."]}"#.to_string(),
        };
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().starts_with("HTTP 400 from http://localhost/tasks/"));

        assert_eq!(ApiError::MissingId.status(), None);
    }
}
