//! Incremental HTTP request parsing.

use std::str::FromStr;

use log::debug;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::headers::{find_crlf, Headers};
use crate::parser::error::Error;
use crate::parser::method::Method;

/// Initial size of the read buffer used by [`Request::from_reader`].
pub const INITIAL_BUFFER_SIZE: usize = 8;

const SUPPORTED_VERSION: &str = "HTTP/1.1";

/// Progress of a request through the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Waiting for a complete request line.
    Initialized,
    /// Reading header lines until the empty line.
    ParsingHeaders,
    /// Reading `Content-Length` bytes of body.
    ParsingBody,
    /// Parsing finished; no more input is accepted.
    Done,
}

/// The first line of an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target, always starting with `/`
    pub request_target: String,
    /// The protocol version without the `HTTP/` prefix, e.g. `1.1`
    pub http_version: String,
}

/// An HTTP request, built incrementally by feeding it bytes.
#[derive(Debug, Clone)]
pub struct Request {
    /// The request line. `None` if the stream ended before one arrived.
    pub request_line: Option<RequestLine>,
    /// The HTTP headers
    pub headers: Headers,
    /// The request body
    pub body: Vec<u8>,
    state: ParseState,
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Create an empty request ready to be fed bytes.
    pub fn new() -> Self {
        Self {
            request_line: None,
            headers: Headers::new(),
            body: Vec::new(),
            state: ParseState::Initialized,
        }
    }

    /// Read and parse a request from `reader`.
    ///
    /// Reading stops once the request is complete or the stream ends. A stream
    /// that ends early yields whatever was parsed so far without an error, so a
    /// successful return does not guarantee a complete request.
    pub async fn from_reader<R>(reader: &mut R) -> Result<Self, Error>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        Self::from_reader_with_capacity(reader, INITIAL_BUFFER_SIZE).await
    }

    /// Like [`Request::from_reader`] with a custom initial buffer size.
    ///
    /// The buffer doubles whenever it fills up, so `capacity` only affects how
    /// many reads a large request takes.
    pub async fn from_reader_with_capacity<R>(reader: &mut R, capacity: usize) -> Result<Self, Error>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        let mut request = Self::new();
        let mut buffer = vec![0; capacity.max(1)];
        let mut filled = 0;

        while request.state != ParseState::Done {
            if filled >= buffer.len() {
                let new_len = buffer.len() * 2;
                buffer.resize(new_len, 0);
            }

            let n = reader.read(&mut buffer[filled..]).await?;
            if n == 0 {
                debug!("Stream ended in state {:?}", request.state);
                request.state = ParseState::Done;
                break;
            }
            filled += n;

            let parsed = request.feed(&buffer[..filled])?;
            if parsed > 0 {
                buffer.copy_within(parsed..filled, 0);
                filled -= parsed;
            }
        }

        Ok(request)
    }

    /// Feed bytes to the parser.
    ///
    /// Parses as much of `data` as possible and returns the number of bytes
    /// consumed. Unconsumed bytes must be passed again, followed by new input,
    /// on the next call.
    pub fn feed(&mut self, data: &[u8]) -> Result<usize, Error> {
        if self.state == ParseState::Done {
            return Err(Error::AlreadyParsed);
        }

        let mut total = 0;
        while self.state != ParseState::Done {
            let n = self.parse_single(&data[total..])?;
            total += n;
            if n == 0 {
                break;
            }
        }

        Ok(total)
    }

    fn parse_single(&mut self, data: &[u8]) -> Result<usize, Error> {
        match self.state {
            ParseState::Initialized => {
                let Some((n, line)) = parse_request_line(data)? else {
                    return Ok(0);
                };
                self.request_line = Some(line);
                self.state = ParseState::ParsingHeaders;
                Ok(n)
            }
            ParseState::ParsingHeaders => {
                let (n, done) = self.headers.parse_line(data)?;
                if done {
                    self.state = ParseState::ParsingBody;
                    return Ok(n + 2);
                }
                Ok(n)
            }
            ParseState::ParsingBody => {
                let Some(declared) = self.content_length()? else {
                    self.state = ParseState::Done;
                    return Ok(0);
                };

                let received = self.body.len() + data.len();
                if received > declared {
                    return Err(Error::ContentLengthExceeded { declared, received });
                }

                self.body.extend_from_slice(data);
                if self.body.len() == declared {
                    self.state = ParseState::Done;
                }
                Ok(data.len())
            }
            ParseState::Done => Err(Error::AlreadyParsed),
        }
    }

    /// Current parser state.
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Returns true once no more input will be accepted.
    pub fn is_done(&self) -> bool {
        self.state == ParseState::Done
    }

    /// The request method, if a request line was parsed.
    pub fn method(&self) -> Option<Method> {
        self.request_line.as_ref().map(|line| line.method)
    }

    /// The request target, if a request line was parsed.
    pub fn target(&self) -> Option<&str> {
        self.request_line
            .as_ref()
            .map(|line| line.request_target.as_str())
    }

    /// Get a header value (case-insensitive).
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Check if a header exists (case-insensitive).
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    /// The declared `Content-Length`, if any.
    pub fn content_length(&self) -> Result<Option<usize>, Error> {
        self.headers
            .get("Content-Length")
            .map(|value| {
                value
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidContentLength(value.to_string()))
            })
            .transpose()
    }

    /// Parse the request body as JSON.
    ///
    /// # Returns
    ///
    /// The parsed JSON value, or an error if the body is not valid JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        if !self.is_json() {
            return Err(Error::MissingHeader("Content-Type: application/json".to_string()));
        }

        let json = serde_json::from_slice(&self.body)?;
        Ok(json)
    }

    /// Check if the Content-Type header is application/json.
    pub fn is_json(&self) -> bool {
        self.get_header("Content-Type")
            .is_some_and(|content_type| content_type.starts_with("application/json"))
    }
}

/// Parse a request line from the start of `data`.
///
/// Returns `None` until a full CRLF-terminated line is available.
fn parse_request_line(data: &[u8]) -> Result<Option<(usize, RequestLine)>, Error> {
    let Some(end) = find_crlf(data) else {
        return Ok(None);
    };

    let line = String::from_utf8_lossy(&data[..end]);
    let parts: Vec<&str> = line.split(' ').collect();
    let &[method, target, version] = parts.as_slice() else {
        return Err(Error::MalformedRequestLine(line.to_string()));
    };

    let method = Method::from_str(method)?;

    if !target.starts_with('/') {
        return Err(Error::InvalidTarget(target.to_string()));
    }

    if version != SUPPORTED_VERSION {
        return Err(Error::UnsupportedVersion(version.to_string()));
    }

    let request_line = RequestLine {
        method,
        request_target: target.to_string(),
        http_version: version.trim_start_matches("HTTP/").to_string(),
    };

    Ok(Some((end + 2, request_line)))
}

/// Parse an HTTP request held entirely in memory.
///
/// # Arguments
///
/// * `input` - A byte slice containing the HTTP request to parse
///
/// # Returns
///
/// The parsed request. As with [`Request::from_reader`], input that ends early
/// yields a partially parsed request rather than an error.
pub fn parse_request(input: &[u8]) -> Result<Request, Error> {
    let mut request = Request::new();
    request.feed(input)?;
    request.state = ParseState::Done;
    Ok(request)
}
