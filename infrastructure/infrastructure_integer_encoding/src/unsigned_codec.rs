//! Unsigned Codec Module
//!
//! Encoding and decoding of non-negative integers (major type 0).
//!
//! | Value                 | Additional information | Payload          |
//! |-----------------------|------------------------|------------------|
//! | 0 ..= 23              | the value itself       | none             |
//! | 24 ..= 0xFF           | 24                     | 1 byte           |
//! | 0x100 ..= 0xFFFF      | 25                     | 2 bytes          |
//! | 0x1_0000 ..= 2^32 - 1 | 26                     | 4 bytes          |
//! | 2^32 ..= 2^64 - 1     | 27                     | 8 bytes (decode; encode only with opt-in) |

use entities_cbor_header::MajorType;
use entities_integer::IntegerValue;

use crate::bias::Sign;
use crate::encoded_integer::EncodedInteger;
use crate::error::{DecodeError, EncodeError};
use crate::options::EncodeOptions;

/// Codec for major type 0
pub struct UnsignedCodec;

impl UnsignedCodec {
    /// Major type handled by this codec
    pub const MAJOR_TYPE: MajorType = MajorType::UnsignedInteger;

    /// Encode a non-negative value in its canonical form
    ///
    /// # Arguments
    /// * `value` - The value to encode, must be `>= 0`
    ///
    /// # Returns
    /// * `Ok(EncodedInteger)` - Header and payload
    /// * `Err(EncodeError::Domain)` - `value` is negative
    /// * `Err(EncodeError::Range)` - `value` is above `0xFFFF_FFFF`
    pub fn encode(value: &IntegerValue) -> Result<EncodedInteger, EncodeError> {
        Self::encode_with(value, &EncodeOptions::default())
    }

    /// Encode with explicit options
    pub fn encode_with(
        value: &IntegerValue,
        options: &EncodeOptions,
    ) -> Result<EncodedInteger, EncodeError> {
        EncodedInteger::encode(Sign::Unsigned, value, options)
    }

    /// Rebuild an item from an already parsed additional information and
    /// its payload
    pub fn decode_item(
        additional_information: u8,
        payload: &[u8],
    ) -> Result<EncodedInteger, DecodeError> {
        EncodedInteger::from_parts(Sign::Unsigned, additional_information, payload)
    }

    /// Decode the value of an item
    ///
    /// # Arguments
    /// * `additional_information` - Low five bits of the initial byte
    /// * `payload` - Exactly the bytes announced by `additional_information`
    pub fn decode(additional_information: u8, payload: &[u8]) -> Result<IntegerValue, DecodeError> {
        Self::decode_item(additional_information, payload).map(|item| item.value())
    }
}
