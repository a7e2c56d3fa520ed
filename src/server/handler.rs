//! Request handler contract.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::AsyncWrite;

use crate::parser::Request;
use crate::response::{Error as ResponseError, StatusCode, Writer};

/// The writer handed to handlers, bound to the connection's outbound half.
pub type ResponseWriter = Writer<Box<dyn AsyncWrite + Send + Unpin>>;

/// Type alias for the boxed future a handler returns.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<(), HandlerError>> + Send + 'a>>;

/// Type alias for a handler function that drives a writer for a request.
pub type HandlerFn = Arc<dyn for<'a> Fn(&'a mut ResponseWriter, &'a Request) -> HandlerFuture<'a> + Send + Sync>;

/// Wrap a function or closure as a [`HandlerFn`].
///
/// ```
/// use rawhttp::server::{handler_fn, HandlerError, ResponseWriter};
/// use rawhttp::{default_headers, Request, StatusCode};
///
/// async fn hello(w: &mut ResponseWriter, _req: &Request) -> Result<(), HandlerError> {
///     let body = b"hello";
///     w.write_status_line(StatusCode::OK).await?;
///     w.write_headers(&default_headers(body.len())).await?;
///     w.write_body(body).await?;
///     Ok(())
/// }
///
/// let handler = handler_fn(|w, req| Box::pin(hello(w, req)));
/// # drop(handler);
/// ```
pub fn handler_fn<F>(f: F) -> HandlerFn
where
    F: for<'a> Fn(&'a mut ResponseWriter, &'a Request) -> HandlerFuture<'a> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A failed handler, carrying the status the server should respond with.
///
/// The server only writes the error response if the handler has not started
/// writing its own response yet.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct HandlerError {
    /// The status code of the error response.
    pub status: StatusCode,
    /// A description for the logs. It is never sent to the client.
    pub message: String,
}

impl HandlerError {
    /// Create a handler error with the given status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A 400 Bad Request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// A 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<ResponseError> for HandlerError {
    fn from(err: ResponseError) -> Self {
        Self::internal(err.to_string())
    }
}
