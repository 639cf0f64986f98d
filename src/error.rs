//! Error definitions for ping construction and delivery.

use reqwest::StatusCode;
use thiserror::Error;

/// Alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a notifier or sending a ping.
#[derive(Debug, Error)]
pub enum Error {
    /// A base or check URL failed to parse, or lacks a scheme/host.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A check UUID was empty at construction time.
    #[error("uuid must not be empty")]
    EmptyUuid,

    /// A project ping key was empty at construction time.
    #[error("project ping key must not be empty")]
    EmptyPingKey,

    /// Exit-status signals only accept non-negative codes.
    #[error("exit code must be >= 0, got {0}")]
    InvalidExitCode(i32),

    /// The request did not complete within the configured timeout.
    #[error("ping request timed out")]
    Timeout,

    /// Network-level failure before a response was received.
    #[error("sending ping request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-200 status.
    #[error("HTTP response status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// The service answered 200 but the body was not the literal "OK".
    ///
    /// The service reports edge cases such as unknown slugs or rate
    /// limiting with a 200 status and an explanatory body, so transport
    /// success alone never confirms the ping was recorded.
    #[error("HTTP response not OK: '{body}'")]
    UnexpectedBody { body: String },
}
