//! Error types for the response writer.

use thiserror::Error;

use crate::response::writer::WriterState;

/// Errors that can occur while writing a response.
#[derive(Debug, Error)]
pub enum Error {
    /// A write was attempted in a state that does not allow it.
    #[error("Cannot {operation} while in state {state:?}")]
    OutOfOrderWrite {
        operation: &'static str,
        state: WriterState,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
