//! Error types for the HTTP parser.

use thiserror::Error;

use crate::headers::Error as HeaderError;

/// Errors that can occur during HTTP request parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line does not have exactly three space-separated parts.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The HTTP method in the request is not supported.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The request target does not start with `/`.
    #[error("Invalid request target: {0}")]
    InvalidTarget(String),

    /// Only HTTP/1.1 is accepted.
    #[error("Unsupported HTTP version: {0}")]
    UnsupportedVersion(String),

    /// A header line could not be parsed.
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// The `Content-Length` header is not a valid length.
    #[error("Invalid Content-Length: {0}")]
    InvalidContentLength(String),

    /// More body bytes arrived than `Content-Length` declared.
    #[error("Content length exceeded: declared {declared}, received {received}")]
    ContentLengthExceeded { declared: usize, received: usize },

    /// The request has already been fully parsed.
    #[error("Request already parsed")]
    AlreadyParsed,

    /// A required header is missing from the request.
    #[error("Required header is missing: {0}")]
    MissingHeader(String),

    /// Error parsing JSON.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error reading from the underlying stream.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
