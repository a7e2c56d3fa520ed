//! HTTP/1.1 over raw TCP streams.
//!
//! This library parses HTTP/1.1 requests and writes HTTP/1.1 responses
//! directly on byte streams, without any HTTP framework underneath.
//!
//! # Features
//!
//! - Resumable request parsing that tolerates input split at any byte
//! - Case-insensitive, ordered header collection with multi-value merging
//! - A response writer that enforces status line, headers, body (or chunked
//!   body and trailers) order
//! - A connection server running one task per connection, one request each
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use rawhttp::{parse_request, Method};
//!
//! let request = parse_request(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
//!
//! assert_eq!(request.method(), Some(Method::GET));
//! assert_eq!(request.target(), Some("/index.html"));
//! assert_eq!(request.get_header("host"), Some("example.com"));
//! ```
//!
//! ## Error handling
//!
//! ```
//! use rawhttp::{parse_request, ParserError};
//!
//! match parse_request(b"GET /index.html HTTP/1.0\r\n\r\n") {
//!     Ok(_) => println!("Request parsed successfully"),
//!     Err(ParserError::UnsupportedVersion(version)) => println!("Unsupported version: {version}"),
//!     Err(err) => println!("Other error: {err}"),
//! }
//! ```
//!
//! ## Writing a response
//!
//! ```
//! use rawhttp::{default_headers, StatusCode, Writer};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut writer = Writer::new(Vec::new());
//! let body = b"<h1>Hello</h1>";
//! let mut headers = default_headers(body.len());
//! headers.overwrite("Content-Type", "text/html");
//!
//! writer.write_status_line(StatusCode::OK).await.unwrap();
//! writer.write_headers(&headers).await.unwrap();
//! writer.write_body(body).await.unwrap();
//! # }
//! ```
//!
//! See the `demos` directory for complete programs, including a server.

// Export the header collection
pub mod headers;

// Export the parser module
pub mod parser;

// Export the response writer
pub mod response;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use headers::{default_headers, Headers};
pub use parser::{parse_request, Error as ParserError, Method, Request, RequestLine};
pub use response::{Error as ResponseError, StatusCode, Writer};
pub use server::{Error as ServerError, HandlerError, HttpServer, ServerConfig};
