//! HTTP status codes.

use std::fmt;

/// An HTTP status code.
///
/// Any three-digit code can be represented; only the codes this crate writes
/// itself carry a reason phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    /// Create a status code from its numeric value.
    pub const fn from_u16(code: u16) -> Self {
        Self(code)
    }

    /// The numeric value of this status code.
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Get the reason phrase for this status code, if it is a known one.
    pub fn reason_phrase(&self) -> Option<&'static str> {
        match self.0 {
            200 => Some("OK"),
            400 => Some("Bad Request"),
            500 => Some("Internal Server Error"),
            _ => None,
        }
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
