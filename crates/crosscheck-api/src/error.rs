//! Error taxonomy for API calls
//!
//! Every failed call surfaces as exactly one [`ApiError`] variant. Negative
//! tests branch on [`ApiError::kind`] instead of matching message strings.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No response at all: connection failure or timeout
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("resource not found (404): {message}")]
    NotFound { message: String },

    /// 401 and 403 collapse into one kind; the original status is kept
    #[error("access denied ({status}): {message}")]
    AccessDenied { status: u16, message: String },

    #[error("invalid request (400): {message}")]
    InvalidRequest { message: String },

    #[error("server error (500): {message}")]
    ServerError { message: String },

    #[error("request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    /// A success status whose body did not parse as the expected type
    #[error("cannot deserialize response into {target}: {reason}")]
    Deserialize { target: &'static str, reason: String },
}

/// Discriminant of [`ApiError`], for assertions in negative tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    NotFound,
    AccessDenied,
    InvalidRequest,
    ServerError,
    RequestFailed,
    Deserialize,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::NotFound => "not-found",
            Self::AccessDenied => "access-denied",
            Self::InvalidRequest => "invalid-request",
            Self::ServerError => "server-error",
            Self::RequestFailed => "request-failed",
            Self::Deserialize => "deserialize",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ApiError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AccessDenied { .. } => ErrorKind::AccessDenied,
            Self::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            Self::ServerError { .. } => ErrorKind::ServerError,
            Self::RequestFailed { .. } => ErrorKind::RequestFailed,
            Self::Deserialize { .. } => ErrorKind::Deserialize,
        }
    }

    /// Status code the error was classified from, where one exists
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::InvalidRequest { .. } => Some(400),
            Self::ServerError { .. } => Some(500),
            Self::AccessDenied { status, .. } | Self::RequestFailed { status, .. } => Some(*status),
            Self::Transport(_) | Self::Deserialize { .. } => None,
        }
    }
}

/// Map a non-success status to its error, carrying the server-provided
/// message. Pure and total over the non-2xx space; a given status always
/// selects the same kind.
#[must_use]
pub fn classify_failure(status: u16, message: impl Into<String>) -> ApiError {
    let mut message = message.into();
    if message.is_empty() {
        message = "unknown error".to_string();
    }

    match status {
        404 => ApiError::NotFound { message },
        401 | 403 => ApiError::AccessDenied { status, message },
        400 => ApiError::InvalidRequest { message },
        500 => ApiError::ServerError { message },
        _ => ApiError::RequestFailed { status, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classify_404_as_not_found() {
        let err = classify_failure(404, "no such product");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("no such product"));
    }

    #[test]
    fn classify_401_and_403_as_access_denied() {
        assert_eq!(classify_failure(401, "bad token").kind(), ErrorKind::AccessDenied);
        assert_eq!(classify_failure(403, "forbidden").kind(), ErrorKind::AccessDenied);
        assert_eq!(classify_failure(401, "bad token").status(), Some(401));
        assert_eq!(classify_failure(403, "forbidden").status(), Some(403));
    }

    #[test]
    fn classify_400_as_invalid_request() {
        assert_eq!(classify_failure(400, "missing name").kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn classify_500_as_server_error() {
        assert_eq!(classify_failure(500, "boom").kind(), ErrorKind::ServerError);
    }

    #[test]
    fn other_5xx_fall_through_to_request_failed() {
        // Only 500 is the dedicated server-error kind; gateways etc. keep
        // their numeric status in the generic kind.
        for status in [501, 502, 503, 504] {
            let err = classify_failure(status, "upstream");
            assert_eq!(err.kind(), ErrorKind::RequestFailed);
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn unlisted_4xx_is_request_failed_with_status() {
        let err = classify_failure(418, "teapot");
        assert_eq!(err.kind(), ErrorKind::RequestFailed);
        assert_eq!(err.status(), Some(418));
        assert!(err.to_string().contains("418"));
    }

    #[test]
    fn empty_message_is_replaced() {
        let err = classify_failure(404, "");
        assert!(err.to_string().contains("unknown error"));
    }

    #[test]
    fn kind_display_labels() {
        assert_eq!(ErrorKind::AccessDenied.to_string(), "access-denied");
        assert_eq!(ErrorKind::Deserialize.to_string(), "deserialize");
    }

    proptest! {
        /// Every non-2xx status selects exactly one kind, stable across calls,
        /// and never one of the kinds reserved for transport/decoding.
        #[test]
        fn classification_is_stable_and_total(status in 100_u16..=599) {
            prop_assume!(!(200..300).contains(&status));

            let first = classify_failure(status, "msg").kind();
            let second = classify_failure(status, "other msg").kind();

            prop_assert_eq!(first, second);
            prop_assert!(first != ErrorKind::Transport);
            prop_assert!(first != ErrorKind::Deserialize);
        }

        /// The originating status is always recoverable from the error.
        #[test]
        fn classified_errors_carry_their_status(status in 100_u16..=599) {
            prop_assume!(!(200..300).contains(&status));
            prop_assert_eq!(classify_failure(status, "msg").status(), Some(status));
        }
    }
}
