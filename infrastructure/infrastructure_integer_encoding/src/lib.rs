//! Infrastructure Layer: Integer Encoding
//!
//! Provides encoding and decoding of CBOR integer items: unsigned integers
//! (major type 0) and negative integers (major type 1).
//!
//! ## Overview
//!
//! An integer item is one header byte `(major_type << 5) | additional_information`
//! followed by 0, 1, 2, 4 or 8 big-endian payload bytes. Negative values are
//! stored with a bias, `magnitude = -value - 1`.
//!
//! The encode path is restrictive: it always emits the shortest form and,
//! by default, refuses magnitudes above `0xFFFF_FFFF` so that callers switch
//! to the big-integer tag extension. The decode path is permissive: it
//! accepts every well-formed width, including non-minimal ones and the
//! 8-byte form, and preserves the original bytes for re-serialization.
//!
//! ## Codecs
//!
//! - **[`unsigned_codec`](unsigned_codec/index.html)**: Major type 0.
//! - **[`signed_codec`](signed_codec/index.html)**: Major type 1.
//! - **[`dispatch`](dispatch/index.html)**: Major-type routing and stream driving.
//!
//! ## Usage
//!
//! ```rust
//! use entities_integer::IntegerValue;
//! use infrastructure_integer_encoding::{decode_slice, encode_signed, DecodeOptions};
//!
//! let item = encode_signed(&IntegerValue::from_i64(-100)).unwrap();
//! assert_eq!(item.to_bytes(), vec![0x38, 0x63]);
//!
//! let decoded = decode_slice(&item.to_bytes(), &DecodeOptions::default()).unwrap();
//! assert_eq!(decoded.to_decimal_string(), "-100");
//! ```
//!
//! ## See Also
//!
//! - [`entities_cbor_header`](../entities_cbor_header/index.html): Header byte model
//! - [`entities_integer`](../entities_integer/index.html): Arbitrary precision values

mod common;

pub mod bias;
pub mod dispatch;
pub mod encoded_integer;
pub mod error;
pub mod options;
pub mod signed_codec;
pub mod stream;
pub mod unsigned_codec;

pub use bias::{bias, unbias, Sign};
pub use dispatch::{decode, decode_item, decode_slice, encode};
pub use encoded_integer::EncodedInteger;
pub use error::{DecodeError, EncodeError};
pub use options::{DecodeOptions, EncodeOptions};
pub use signed_codec::SignedCodec;
pub use stream::{ByteReader, ByteWriter, SliceReader};
pub use unsigned_codec::UnsignedCodec;

// Re-export width helpers for callers building their own payloads
pub use common::{pack_be, select_width, unpack_be};

use entities_integer::IntegerValue;

/// Encode a non-negative value (major type 0) with default options
pub fn encode_unsigned(value: &IntegerValue) -> Result<EncodedInteger, EncodeError> {
    UnsignedCodec::encode(value)
}

/// Encode a negative value (major type 1) with default options
pub fn encode_signed(value: &IntegerValue) -> Result<EncodedInteger, EncodeError> {
    SignedCodec::encode(value)
}
