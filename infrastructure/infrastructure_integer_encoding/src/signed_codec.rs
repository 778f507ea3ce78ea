//! Signed Codec Module
//!
//! Encoding and decoding of negative integers (major type 1). The wire
//! carries `magnitude = -value - 1`; see [`crate::bias`].

use entities_cbor_header::MajorType;
use entities_integer::IntegerValue;

use crate::bias::Sign;
use crate::encoded_integer::EncodedInteger;
use crate::error::{DecodeError, EncodeError};
use crate::options::EncodeOptions;

/// Codec for major type 1
pub struct SignedCodec;

impl SignedCodec {
    /// Major type handled by this codec
    pub const MAJOR_TYPE: MajorType = MajorType::NegativeInteger;

    /// Encode a negative value in its canonical form
    ///
    /// # Arguments
    /// * `value` - The value to encode, must be `< 0`
    ///
    /// # Returns
    /// * `Ok(EncodedInteger)` - Header and payload
    /// * `Err(EncodeError::Domain)` - `value` is zero or positive
    /// * `Err(EncodeError::Range)` - `-value - 1` is above `0xFFFF_FFFF`
    pub fn encode(value: &IntegerValue) -> Result<EncodedInteger, EncodeError> {
        Self::encode_with(value, &EncodeOptions::default())
    }

    /// Encode with explicit options
    pub fn encode_with(
        value: &IntegerValue,
        options: &EncodeOptions,
    ) -> Result<EncodedInteger, EncodeError> {
        EncodedInteger::encode(Sign::Negative, value, options)
    }

    /// Rebuild an item from an already parsed additional information and
    /// its payload
    pub fn decode_item(
        additional_information: u8,
        payload: &[u8],
    ) -> Result<EncodedInteger, DecodeError> {
        EncodedInteger::from_parts(Sign::Negative, additional_information, payload)
    }

    /// Decode the value of an item: `-(magnitude + 1)`
    pub fn decode(additional_information: u8, payload: &[u8]) -> Result<IntegerValue, DecodeError> {
        Self::decode_item(additional_information, payload).map(|item| item.value())
    }
}
