//! Ordered HTTP response writing.

use log::debug;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::headers::{default_headers, Headers};
use crate::response::error::Error;
use crate::response::status::StatusCode;

const CRLF: &[u8] = b"\r\n";

/// How the body of a response is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Raw bytes, delimited by `Content-Length`.
    Plain,
    /// `Transfer-Encoding: chunked`.
    Chunked,
}

/// The part of the response the writer expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    AwaitingStatusLine,
    AwaitingHeaders,
    AwaitingBody(BodyKind),
    AwaitingTrailers,
    Closed,
}

/// Writes an HTTP/1.1 response to `W`, enforcing the order of its parts.
///
/// A response is either status line, headers and a plain body, or status
/// line, headers, a chunked body and trailers. Calls made out of order fail
/// with [`Error::OutOfOrderWrite`] without writing anything.
pub struct Writer<W> {
    inner: W,
    state: WriterState,
}

impl<W> Writer<W>
where
    W: AsyncWrite + Unpin,
{
    /// Create a writer positioned before the status line.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            state: WriterState::AwaitingStatusLine,
        }
    }

    /// The part of the response expected next.
    pub fn state(&self) -> WriterState {
        self.state
    }

    /// Consume the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn expect(&self, expected: WriterState, operation: &'static str) -> Result<(), Error> {
        if self.state != expected {
            return Err(Error::OutOfOrderWrite {
                operation,
                state: self.state,
            });
        }
        Ok(())
    }

    /// Write `HTTP/1.1 <code> <reason>`.
    ///
    /// Codes without a known reason phrase are written with an empty reason.
    pub async fn write_status_line(&mut self, code: StatusCode) -> Result<(), Error> {
        self.expect(WriterState::AwaitingStatusLine, "write status line")?;

        let reason = code.reason_phrase().unwrap_or_default();
        let line = format!("HTTP/1.1 {code} {reason}\r\n");
        self.inner.write_all(line.as_bytes()).await?;

        self.state = WriterState::AwaitingHeaders;
        Ok(())
    }

    /// Write the header section followed by the blank line.
    ///
    /// A `Transfer-Encoding` header containing `chunked` switches the writer to
    /// chunked body mode.
    pub async fn write_headers(&mut self, headers: &Headers) -> Result<(), Error> {
        self.expect(WriterState::AwaitingHeaders, "write headers")?;

        self.write_header_block(headers).await?;

        let chunked = headers
            .get("Transfer-Encoding")
            .is_some_and(|value| value.to_ascii_lowercase().contains("chunked"));
        let kind = if chunked { BodyKind::Chunked } else { BodyKind::Plain };

        self.state = WriterState::AwaitingBody(kind);
        Ok(())
    }

    /// Write body bytes verbatim.
    ///
    /// The caller must have declared a matching `Content-Length`.
    pub async fn write_body(&mut self, data: &[u8]) -> Result<usize, Error> {
        self.expect(WriterState::AwaitingBody(BodyKind::Plain), "write body")?;

        self.inner.write_all(data).await?;
        Ok(data.len())
    }

    /// Write one chunk of a chunked body.
    ///
    /// Empty input writes nothing, since a zero-length chunk ends the body.
    pub async fn write_chunked_body(&mut self, data: &[u8]) -> Result<usize, Error> {
        self.expect(WriterState::AwaitingBody(BodyKind::Chunked), "write chunked body")?;

        if data.is_empty() {
            return Ok(0);
        }

        let mut frame = Vec::with_capacity(data.len() + 12);
        frame.extend_from_slice(format!("{:x}\r\n", data.len()).as_bytes());
        frame.extend_from_slice(data);
        frame.extend_from_slice(CRLF);
        self.inner.write_all(&frame).await?;

        Ok(data.len())
    }

    /// Write the terminating zero-length chunk.
    pub async fn write_chunked_body_done(&mut self) -> Result<(), Error> {
        self.expect(WriterState::AwaitingBody(BodyKind::Chunked), "finish chunked body")?;

        self.inner.write_all(b"0\r\n\r\n").await?;

        self.state = WriterState::AwaitingTrailers;
        Ok(())
    }

    /// Write trailer headers and the final blank line.
    pub async fn write_trailers(&mut self, trailers: &Headers) -> Result<(), Error> {
        self.expect(WriterState::AwaitingTrailers, "write trailers")?;

        self.write_header_block(trailers).await?;

        self.state = WriterState::Closed;
        Ok(())
    }

    /// Write a complete response with a canned HTML body for `code`.
    pub async fn write_error(&mut self, code: StatusCode) -> Result<(), Error> {
        self.expect(WriterState::AwaitingStatusLine, "write error response")?;
        debug!("Writing {code} error response");

        let body = error_page(code);
        let mut headers = default_headers(body.len());
        headers.overwrite("Content-Type", "text/html");

        self.write_status_line(code).await?;
        self.write_headers(&headers).await?;
        self.write_body(body.as_bytes()).await?;
        Ok(())
    }

    /// Flush and shut down the underlying stream.
    pub async fn shutdown(&mut self) -> Result<(), Error> {
        self.inner.flush().await?;
        self.inner.shutdown().await?;
        Ok(())
    }

    async fn write_header_block(&mut self, headers: &Headers) -> Result<(), Error> {
        let mut block = Vec::new();
        for (name, value) in headers {
            block.extend_from_slice(name.as_bytes());
            block.extend_from_slice(b": ");
            block.extend_from_slice(value.as_bytes());
            block.extend_from_slice(CRLF);
        }
        block.extend_from_slice(CRLF);
        self.inner.write_all(&block).await?;
        Ok(())
    }
}

/// HTML body used by [`Writer::write_error`].
fn error_page(code: StatusCode) -> String {
    let (title, message) = match code {
        StatusCode::BAD_REQUEST => ("Bad Request", "The server could not understand your request."),
        StatusCode::INTERNAL_SERVER_ERROR => (
            "Internal Server Error",
            "Something went wrong on our side while handling your request.",
        ),
        _ => ("Error", "The request could not be completed."),
    };

    format!(
        "<html>\n  <head>\n    <title>{code} {title}</title>\n  </head>\n  <body>\n    <h1>{title}</h1>\n    <p>{message}</p>\n  </body>\n</html>"
    )
}
