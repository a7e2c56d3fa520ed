//! Error types for header parsing.

use thiserror::Error;

/// Errors that can occur while parsing a header line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The header line has no `:` separator.
    #[error("Malformed header line: {0}")]
    MalformedHeader(String),

    /// The header name contains characters outside the token charset.
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),
}
