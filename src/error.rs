//! # Error Types
//!
//! The uniform error surface for every client operation. Each variant maps to
//! one failure class: transport, server-reported, local validation, session,
//! or an unparseable success body. No variant is fatal; every failure is
//! terminal for that attempt and the caller decides whether to re-submit.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Error type returned by all SDK operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response was received: DNS failure, timeout, connection reset.
    /// Never retried by the client.
    #[error("Network error. Please try again.")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status. `message` is the
    /// human-readable text parsed from the error body, or a per-endpoint
    /// fallback when the body is unparseable.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Required input was missing or malformed; caught before any network
    /// call is made.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The stored session is absent, malformed, or expired.
    #[error("Session error: {0}")]
    Session(String),

    /// A 2xx response carried a body the expected shape could not be
    /// decoded from.
    #[error("Failed to decode server response")]
    Decode(#[source] serde_json::Error),

    /// Configuration could not be loaded or was malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// True when the failure should send the user back through login
    /// rather than show an inline message.
    pub fn requires_login(&self) -> bool {
        matches!(self, ClientError::Session(_))
            || matches!(self, ClientError::Api { status: 401, .. })
    }
}
