use thiserror::Error;

/// Application-wide error types for Scout.
#[derive(Error, Debug)]
pub enum AppError {
    /// Keyword rejected before any network call. Surfaced to the caller
    /// verbatim.
    #[error("{0}")]
    InvalidInput(String),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    /// Upstream tried to redirect. Redirects are never followed; a 3xx from
    /// the search host usually means a consent wall or CAPTCHA.
    #[error("Upstream redirected (HTTP {0}); refusing to follow")]
    Blocked(u16),

    /// A single attempt exceeded its time budget.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Response body exceeded the configured cap.
    #[error("Response body exceeded {0} bytes")]
    BodyTooLarge(usize),

    /// Connection-level failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Retry budget exhausted; carries the last failure.
    #[error("Gave up after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: String },
}

impl AppError {
    /// Returns true if another attempt is worth making. Only the upstream
    /// "temporarily unavailable" status qualifies; every other failure is
    /// terminal for the request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::UpstreamStatus(503))
    }

    /// Returns true if the error is user-correctable and safe to surface
    /// verbatim. Everything else is logged server-side and collapsed into
    /// a generic server error at the HTTP boundary.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_upstream_503_is_retryable() {
        assert!(AppError::UpstreamStatus(503).is_retryable());
        assert!(!AppError::UpstreamStatus(500).is_retryable());
        assert!(!AppError::Blocked(302).is_retryable());
        assert!(!AppError::Timeout(10).is_retryable());
        assert!(!AppError::Network("reset".into()).is_retryable());
    }

    #[test]
    fn only_invalid_input_is_user_error() {
        assert!(AppError::InvalidInput("bad keyword".into()).is_user_error());
        assert!(!AppError::UpstreamStatus(503).is_user_error());
        assert!(
            !AppError::RetriesExhausted {
                attempts: 3,
                last: "HTTP 503".into()
            }
            .is_user_error()
        );
    }

    #[test]
    fn invalid_input_message_is_verbatim() {
        let err = AppError::InvalidInput("Keyword is required".into());
        assert_eq!(err.to_string(), "Keyword is required");
    }
}
