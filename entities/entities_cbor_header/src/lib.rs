//! Entities Layer: CBOR Header
//!
//! This crate models the initial byte that starts every CBOR data item.
//!
//! ## Overview
//!
//! Each item begins with one byte laid out as `MMMAAAAA`: a 3-bit major type
//! followed by a 5-bit additional information field. For the integer major
//! types the additional information either carries the value itself (0..=23)
//! or announces a big-endian payload of 1, 2, 4 or 8 bytes (24..=27).
//!
//! As an entities crate it has no dependencies on the rest of the workspace.
//!
//! ## Modules
//!
//! - **[`major_type`](major_type/index.html)**: The eight CBOR major types.
//! - **[`width`](width/index.html)**: Payload widths selected by additional
//!   information and the magnitude each width can hold.
//! - **[`header`](header/index.html)**: The validated initial byte and its
//!   error type.
//!
//! ## Usage
//!
//! ```rust
//! use entities_cbor_header::{Header, MajorType, PayloadWidth};
//!
//! let header = Header::from_byte(0x19).unwrap();
//! assert_eq!(header.major_type(), MajorType::UnsignedInteger);
//! assert_eq!(header.payload_width(), PayloadWidth::Two);
//! assert_eq!(header.to_byte(), 0x19);
//! ```

pub mod header;
pub mod major_type;
pub mod width;

pub use header::{Header, HeaderError};
pub use major_type::MajorType;
pub use width::PayloadWidth;

/// Largest additional information value that is stored inline
pub const MAX_INLINE_VALUE: u8 = 23;

/// Largest additional information value accepted for integer items
pub const MAX_ADDITIONAL_INFORMATION: u8 = 27;

/// Additional information value marking an indefinite-length item
pub const INDEFINITE_LENGTH: u8 = 31;
