//! HTTP header collection.
//!
//! This module provides an ordered, case-insensitive header store together with
//! a streaming parser that consumes one header line at a time.

mod collection;
mod error;
mod tests;

// Re-export public items
pub use collection::{default_headers, Headers};
pub use error::Error;
pub(crate) use collection::find_crlf;
