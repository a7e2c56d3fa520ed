//! HTTP request parser module.
//!
//! This module provides a resumable parser that turns an arbitrarily chunked
//! byte stream into a structured [`Request`].

mod request;
mod method;
mod error;

// Re-export public items
pub use request::{ParseState, Request, RequestLine, INITIAL_BUFFER_SIZE};
pub use method::Method;
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
