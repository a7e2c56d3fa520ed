//! HTTP server implementation for rawhttp-rs.
//!
//! This module accepts TCP connections, parses one request per connection,
//! hands it to a user-supplied handler together with a response writer, and
//! closes the connection afterwards.

mod config;
mod error;
mod handler;
mod http_server;

// Re-export public items
pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::Error;
pub use handler::{handler_fn, HandlerError, HandlerFn, HandlerFuture, ResponseWriter};
pub use http_server::HttpServer;
