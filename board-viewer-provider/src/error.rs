use serde::{Deserialize, Serialize};

/// Unified error type for listing service calls.
///
/// Each variant names the `endpoint` that produced it (`"boards"`, `"user/role"`)
/// plus variant-specific context. All variants are serializable for structured
/// error reporting.
///
/// Callers never surface these to the user: the board view-model converts any
/// `FetchError` into an empty listing or a non-privileged flag. The variants exist so
/// that the failure can be logged at the right level and classified by
/// [`kind`](Self::kind).
///
/// # Retryable Errors
///
/// - [`NetworkError`](Self::NetworkError): connection refused, DNS failure, reset
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): HTTP 429
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum FetchError {
    /// A network-level error occurred (connection refused, DNS failure, etc.).
    NetworkError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request (or the caller's fetch deadline) timed out.
    Timeout {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The service answered HTTP 429.
    RateLimited {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Suggested wait time in seconds, if the service sent `Retry-After`.
        retry_after: Option<u64>,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The service answered with a non-2xx status other than 429.
    HttpStatus {
        /// Endpoint that produced the error.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The response body could not be parsed into the expected shape.
    ParseError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },
}

/// Two-way classification of [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchErrorKind {
    /// Network unreachable, timed out, or a non-2xx status.
    Transport,
    /// The body was missing or had invalid fields.
    MalformedResponse,
}

impl FetchError {
    /// Endpoint that produced the error.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::NetworkError { endpoint, .. }
            | Self::Timeout { endpoint, .. }
            | Self::RateLimited { endpoint, .. }
            | Self::HttpStatus { endpoint, .. }
            | Self::ParseError { endpoint, .. } => endpoint,
        }
    }

    /// Classify the error as a transport failure or a malformed response.
    #[must_use]
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::ParseError { .. } => FetchErrorKind::MalformedResponse,
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::RateLimited { .. }
            | Self::HttpStatus { .. } => FetchErrorKind::Transport,
        }
    }

    /// Whether the failure is routine (not signed in, bad request parameters); used
    /// for log levelling.
    ///
    /// Returns `true` for client-side HTTP statuses (4xx). These show up routinely,
    /// e.g. `GET /user/role` answers 401 for anonymous visitors.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if (400..500).contains(status))
    }

    /// Level at which the HTTP layer logs this error: `debug` when
    /// [`is_expected`](Self::is_expected), `warn` otherwise.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        if self.is_expected() {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::RateLimited {
                endpoint,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{endpoint}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{endpoint}] Rate limited")
                }
            }
            Self::HttpStatus {
                endpoint,
                status,
                raw_message,
            } => match raw_message.as_deref() {
                Some(msg) if !msg.is_empty() => write!(f, "[{endpoint}] HTTP {status}: {msg}"),
                _ => write!(f, "[{endpoint}] HTTP {status}"),
            },
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Convenience type alias for `Result<T, FetchError>`.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = FetchError::NetworkError {
            endpoint: "boards".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[boards] Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = FetchError::Timeout {
            endpoint: "user/role".to_string(),
            detail: "15s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[user/role] Request timeout: 15s elapsed");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = FetchError::RateLimited {
            endpoint: "boards".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[boards] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_rate_limited_without_retry() {
        let e = FetchError::RateLimited {
            endpoint: "boards".to_string(),
            retry_after: None,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[boards] Rate limited");
    }

    #[test]
    fn display_http_status_with_body() {
        let e = FetchError::HttpStatus {
            endpoint: "boards".to_string(),
            status: 500,
            raw_message: Some("Internal Server Error".to_string()),
        };
        assert_eq!(e.to_string(), "[boards] HTTP 500: Internal Server Error");
    }

    #[test]
    fn display_http_status_with_empty_body() {
        let e = FetchError::HttpStatus {
            endpoint: "user/role".to_string(),
            status: 401,
            raw_message: Some(String::new()),
        };
        assert_eq!(e.to_string(), "[user/role] HTTP 401");
    }

    #[test]
    fn display_parse_error() {
        let e = FetchError::ParseError {
            endpoint: "boards".to_string(),
            detail: "expected value".to_string(),
        };
        assert_eq!(e.to_string(), "[boards] Parse error: expected value");
    }

    #[test]
    fn kind_splits_transport_and_malformed() {
        let transport = [
            FetchError::NetworkError {
                endpoint: "b".into(),
                detail: "d".into(),
            },
            FetchError::Timeout {
                endpoint: "b".into(),
                detail: "d".into(),
            },
            FetchError::RateLimited {
                endpoint: "b".into(),
                retry_after: None,
                raw_message: None,
            },
            FetchError::HttpStatus {
                endpoint: "b".into(),
                status: 503,
                raw_message: None,
            },
        ];
        for e in &transport {
            assert_eq!(e.kind(), FetchErrorKind::Transport, "{e}");
        }

        let malformed = FetchError::ParseError {
            endpoint: "b".into(),
            detail: "d".into(),
        };
        assert_eq!(malformed.kind(), FetchErrorKind::MalformedResponse);
    }

    #[test]
    fn client_statuses_are_expected() {
        let unauthorized = FetchError::HttpStatus {
            endpoint: "user/role".into(),
            status: 401,
            raw_message: None,
        };
        let server = FetchError::HttpStatus {
            endpoint: "boards".into(),
            status: 500,
            raw_message: None,
        };
        assert!(unauthorized.is_expected());
        assert!(!server.is_expected());
        assert!(
            !FetchError::NetworkError {
                endpoint: "boards".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
    }

    #[test]
    fn client_errors_logged_at_debug_others_at_warn() {
        let unauthorized = FetchError::HttpStatus {
            endpoint: "user/role".into(),
            status: 401,
            raw_message: None,
        };
        let server = FetchError::HttpStatus {
            endpoint: "boards".into(),
            status: 500,
            raw_message: None,
        };
        let parse = FetchError::ParseError {
            endpoint: "boards".into(),
            detail: "eof".into(),
        };
        assert_eq!(unauthorized.log_level(), log::Level::Debug);
        assert_eq!(server.log_level(), log::Level::Warn);
        assert_eq!(parse.log_level(), log::Level::Warn);
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = FetchError::HttpStatus {
            endpoint: "boards".to_string(),
            status: 502,
            raw_message: None,
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"HttpStatus\""));
        assert!(json.contains("\"status\":502"));

        let back: FetchError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), e.to_string());
    }

    #[test]
    fn endpoint_accessor() {
        let e = FetchError::ParseError {
            endpoint: "user/role".into(),
            detail: "x".into(),
        };
        assert_eq!(e.endpoint(), "user/role");
    }
}
