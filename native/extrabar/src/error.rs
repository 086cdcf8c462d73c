//! Extraction errors
//!
//! Malformed input normally degrades to "fewer items". The scan itself fails
//! only on a closing tag that would take the nesting depth below zero, since
//! every depth after it would be meaningless. Span extraction also refuses
//! inputs too large for 32-bit offsets.

use std::fmt;

/// Category of an extraction failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// More closing tags than opening tags at some point in the document
    MalformedDocument,
    /// Input longer than span offsets can address
    InputTooLarge,
}

impl ErrorKind {
    /// Stable snake_case name, used for the NIF error atom
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedDocument => "malformed_document",
            ErrorKind::InputTooLarge => "input_too_large",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedDocument => f.write_str("malformed document"),
            ErrorKind::InputTooLarge => f.write_str("input too large"),
        }
    }
}

/// Error returned by the outline scanner and the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at byte {position}")]
pub struct ExtractError {
    pub kind: ErrorKind,
    /// Byte offset of the markup that triggered the error
    pub position: usize,
}

impl ExtractError {
    pub fn new(kind: ErrorKind, position: usize) -> Self {
        ExtractError { kind, position }
    }

    /// Depth underflow caused by the closing tag at `position`
    pub fn malformed(position: usize) -> Self {
        Self::new(ErrorKind::MalformedDocument, position)
    }

    /// Input whose bytes from `position` on cannot be addressed by a span
    pub fn too_large(position: usize) -> Self {
        Self::new(ErrorKind::InputTooLarge, position)
    }
}
