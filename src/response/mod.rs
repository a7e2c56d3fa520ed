//! HTTP response writing.
//!
//! This module provides a [`Writer`] that emits an HTTP/1.1 response in its
//! legal order, including chunked bodies and trailers.

mod error;
mod status;
mod writer;

// Re-export public items
pub use error::Error;
pub use status::StatusCode;
pub use writer::{BodyKind, Writer, WriterState};
