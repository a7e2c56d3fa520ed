//! Error types for the HTTP server.

use thiserror::Error;

use crate::parser::Error as ParserError;
use crate::response::Error as ResponseError;
use crate::server::handler::HandlerError;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// The peer closed the connection before sending a request line.
    #[error("Connection closed before a request line was received")]
    IncompleteRequest,

    /// Error writing a response.
    #[error("Write error: {0}")]
    WriteError(#[from] ResponseError),

    /// The handler asked for an error response.
    #[error("Handler error: {0}")]
    HandlerError(#[from] HandlerError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
