// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ilo_switch` library.
//!
//! Every operation against the management controller completes with either a
//! value or one of these errors. Transport failures, unexpected HTTP statuses
//! and malformed response bodies are kept apart so callers can tell a
//! powered-off machine from an unreachable or incompatible one.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while talking to the management API.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a management API response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A value supplied by the caller was rejected.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The switch configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to the HTTPS transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The management controller could not be reached.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The controller rejected the supplied credentials.
    #[error("authentication failed (HTTP {status})")]
    AuthenticationFailed {
        /// The HTTP status code returned (401 or 403).
        status: u16,
    },

    /// The controller answered with a non-success status code.
    #[error("unexpected HTTP status {status} - {reason}")]
    UnexpectedStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl ProtocolError {
    /// Classifies a `reqwest` error, separating timeouts and connect failures
    /// from other transport errors.
    ///
    /// A timeout during connection setup reports `connect_timeout`, any other
    /// timeout reports the request `timeout`.
    pub(crate) fn from_transport(
        err: reqwest::Error,
        timeout: std::time::Duration,
        connect_timeout: std::time::Duration,
    ) -> Self {
        if err.is_timeout() {
            let elapsed = if err.is_connect() { connect_timeout } else { timeout };
            Self::Timeout(duration_millis(elapsed))
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::Http(err)
        }
    }
}

fn duration_millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Errors related to parsing management API responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// Errors related to caller-supplied values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An invalid power intent string was provided.
    #[error("invalid power intent: {0}")]
    InvalidPowerIntent(String),
}

/// Errors related to loading the switch configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON or has the wrong shape.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required key is missing or empty.
    #[error("missing configuration key: {0}")]
    MissingField(&'static str),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("Status.State".to_string());
        assert_eq!(err.to_string(), "missing field in response: Status.State");
    }

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::AuthenticationFailed { status: 401 };
        assert_eq!(err.to_string(), "authentication failed (HTTP 401)");

        let err = ProtocolError::UnexpectedStatus {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 500 - Internal Server Error"
        );
    }

    #[test]
    fn timeout_display_uses_milliseconds() {
        let err = ProtocolError::Timeout(duration_millis(std::time::Duration::from_secs(5)));
        assert_eq!(err.to_string(), "request timed out after 5000 ms");
    }

    #[test]
    fn error_from_parse_error() {
        let err: Error = ParseError::MissingField("Status.State".to_string()).into();
        assert!(matches!(err, Error::Parse(ParseError::MissingField(_))));
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidPowerIntent("maybe".to_string()).into();
        assert_eq!(err.to_string(), "value error: invalid power intent: maybe");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::MissingField("server");
        assert_eq!(err.to_string(), "missing configuration key: server");
    }
}
