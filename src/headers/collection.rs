//! Ordered header storage and line parsing.

use crate::headers::error::Error;

const CRLF: &[u8] = b"\r\n";

/// A single stored header.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// Lower-cased name used for every lookup.
    key: String,
    /// Name as it was spelled when first inserted.
    name: String,
    value: String,
}

/// An ordered collection of HTTP headers.
///
/// Names are matched case-insensitively and stored under their lower-cased form.
/// Iteration yields headers in insertion order, using the spelling under which
/// each header was first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<Entry>,
}

impl Headers {
    /// Create an empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.key.eq_ignore_ascii_case(name))
    }

    /// Get a header value by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].value.as_str())
    }

    /// Check if a header exists (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Insert a header, appending to an existing value with `", "`.
    ///
    /// This is the standard HTTP multi-value semantics: `Accept: a` followed by
    /// `Accept: b` is equivalent to `Accept: a, b`.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.position(name) {
            Some(i) => {
                let entry = &mut self.entries[i];
                entry.value.push_str(", ");
                entry.value.push_str(value);
            }
            None => self.push(name, value),
        }
    }

    /// Insert a header, replacing any existing value.
    pub fn overwrite(&mut self, name: &str, value: &str) {
        match self.position(name) {
            Some(i) => {
                let entry = &mut self.entries[i];
                entry.name = name.to_string();
                entry.value = value.to_string();
            }
            None => self.push(name, value),
        }
    }

    /// Remove a header (case-insensitive). Returns the removed value.
    pub fn delete(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|i| self.entries.remove(i).value)
    }

    fn push(&mut self, name: &str, value: &str) {
        self.entries.push(Entry {
            key: name.to_ascii_lowercase(),
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Number of distinct headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.value.as_str()))
    }

    /// Iterate over the lower-cased header names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Parse a single header line from the start of `data`.
    ///
    /// # Arguments
    ///
    /// * `data` - The unconsumed tail of the stream
    ///
    /// # Returns
    ///
    /// A tuple of the number of bytes consumed and whether the empty line that
    /// terminates the header section was found. The terminator itself is not
    /// consumed. `(0, false)` means no complete line is buffered yet.
    pub fn parse_line(&mut self, data: &[u8]) -> Result<(usize, bool), Error> {
        if data.starts_with(CRLF) {
            return Ok((0, true));
        }

        let Some(end) = find_crlf(data) else {
            return Ok((0, false));
        };

        let line = String::from_utf8_lossy(&data[..end]);
        let (name, value) = line
            .trim()
            .split_once(':')
            .ok_or_else(|| Error::MalformedHeader(line.to_string()))?;

        if !is_token(name) {
            return Err(Error::InvalidHeaderName(name.to_string()));
        }

        self.set(name, value.trim());

        Ok((end + CRLF.len(), false))
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Baseline response headers for a body of `content_length` bytes.
///
/// Callers adjust these with [`Headers::overwrite`] and [`Headers::delete`]
/// before writing them, e.g. to switch to HTML or chunked streaming.
pub fn default_headers(content_length: usize) -> Headers {
    let mut headers = Headers::new();
    headers.set("Connection", "close");
    headers.set("Content-Length", &content_length.to_string());
    headers.set("Content-Type", "plain/text");
    headers
}

/// Position of the first CRLF in `data`.
pub(crate) fn find_crlf(data: &[u8]) -> Option<usize> {
    data.windows(CRLF.len()).position(|window| window == CRLF)
}

fn is_token(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!'
                        | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'|'
                        | b'~'
                )
        })
}
