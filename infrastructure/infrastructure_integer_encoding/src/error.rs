//! Error Types
//!
//! Encoding and decoding failures. Every failure is reported through the
//! call's `Result`; there is no partial success.

use std::fmt;

use entities_cbor_header::HeaderError;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Value has the wrong sign for the chosen major type
    Domain(String),
    /// Magnitude exceeds the direct forms this encoder emits; the caller has
    /// to fall back to the big-integer tag with a byte string
    Range(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Domain(msg) => write!(f, "Domain error: {}", msg),
            EncodeError::Range(msg) => write!(f, "Range error: {}", msg),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Stream ended before the requested number of bytes
    BufferTooShort {
        /// Bytes requested
        needed: usize,
        /// Bytes left in the stream
        available: usize,
    },
    /// Payload length differs from the width declared by the header
    PayloadLengthMismatch {
        /// Width implied by the additional information
        expected: usize,
        /// Bytes actually supplied
        actual: usize,
    },
    /// Header carries a major type other than 0 or 1
    UnexpectedMajorType(u8),
    /// Initial byte could not be parsed
    Header(HeaderError),
    /// A wider form than necessary was used while canonical input was required
    NonCanonical {
        /// Additional information found on the wire
        additional_information: u8,
        /// Magnitude carried by the item
        magnitude: u64,
    },
    /// Input continued past the end of the decoded item
    TrailingBytes(usize),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::BufferTooShort { needed, available } => write!(
                f,
                "Buffer too short: needed {} bytes, {} available",
                needed, available
            ),
            DecodeError::PayloadLengthMismatch { expected, actual } => write!(
                f,
                "Payload length mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            DecodeError::UnexpectedMajorType(major) => {
                write!(f, "Expected integer major type (0 or 1), got {}", major)
            }
            DecodeError::Header(err) => write!(f, "Invalid header: {}", err),
            DecodeError::NonCanonical {
                additional_information,
                magnitude,
            } => write!(
                f,
                "Non-canonical encoding: magnitude {} stored with additional information {}",
                magnitude, additional_information
            ),
            DecodeError::TrailingBytes(count) => {
                write!(f, "{} trailing bytes after integer item", count)
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Header(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HeaderError> for DecodeError {
    fn from(err: HeaderError) -> Self {
        DecodeError::Header(err)
    }
}
