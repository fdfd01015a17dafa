//! Unified error type for the network layer.

use thiserror::Error;

/// Transport-level failure.
///
/// Business failures (`code != 200` inside a delivered envelope) are not
/// errors; they come back as a normal [`Envelope`](crate::Envelope) with the
/// payload cleared. An `Err` here always means the exchange itself broke,
/// and the matching notification has already been emitted during
/// classification.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request timed out before the server answered.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The server could not be reached, or the connection broke mid-flight.
    #[error("failed to reach server: {0}")]
    Connect(String),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {status}")]
    Status {
        /// Received status code.
        status: u16,
    },

    /// The response body was not a valid envelope.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be built.
    #[error("failed to configure HTTP client: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, HttpError>`.
pub type Result<T> = std::result::Result<T, HttpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_timeout() {
        let e = HttpError::Timeout("deadline elapsed".to_string());
        assert_eq!(e.to_string(), "request timeout: deadline elapsed");
    }

    #[test]
    fn display_connect() {
        let e = HttpError::Connect("connection refused".to_string());
        assert_eq!(e.to_string(), "failed to reach server: connection refused");
    }

    #[test]
    fn display_status() {
        let e = HttpError::Status { status: 404 };
        assert_eq!(e.to_string(), "HTTP status 404");
    }

    #[test]
    fn display_decode() {
        let e = HttpError::Decode("expected value at line 1".to_string());
        assert_eq!(
            e.to_string(),
            "failed to decode response body: expected value at line 1"
        );
    }
}
