//! Transport-level failures.

use thiserror::Error;

/// Errors from the transport layer.
///
/// These represent failures to complete an exchange at all (network,
/// timeout, no runtime). An exchange that completes with a non-success
/// status is not a transport error.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to establish connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// No async runtime was available to drive the transport.
    #[error("Transport runtime unavailable: {0}")]
    Runtime(String),
}

impl TransportError {
    /// Returns `true` for failures that typically succeed on retry.
    ///
    /// Generated bindings never retry; this is for callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => true,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::Runtime(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_retryable() {
        let err = TransportError::Timeout { duration_ms: 5000 };
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "Request timeout after 5000ms");
    }

    #[test]
    fn connection_is_retryable() {
        let err = TransportError::Connection("connection refused".to_string());
        assert!(err.is_retryable());
    }

    #[test]
    fn missing_runtime_is_not_retryable() {
        let err = TransportError::Runtime("no reactor running".to_string());
        assert!(!err.is_retryable());
    }
}
