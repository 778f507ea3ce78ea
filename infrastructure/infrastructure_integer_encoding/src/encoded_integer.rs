//! Encoded Integer Module
//!
//! [`EncodedInteger`] is the wire-side form of an integer item: a header
//! (major type + additional information) and the payload bytes exactly as
//! they were produced or read. It is immutable once built.
//!
//! Items built by [`EncodedInteger::encode`] are always canonical. Items
//! rebuilt by [`EncodedInteger::from_parts`] keep whatever width the producer
//! chose, so re-serializing them reproduces the original bytes even when a
//! wider form than necessary was used.

use std::fmt;

use entities_cbor_header::{Header, MajorType, PayloadWidth};
use entities_integer::IntegerValue;
use log::{debug, trace};

use crate::bias::{bias, unbias, Sign};
use crate::common::{pack_be, select_width, unpack_be};
use crate::error::{DecodeError, EncodeError};
use crate::options::EncodeOptions;
use crate::stream::ByteWriter;

/// Integer item of major type 0 or 1
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedInteger {
    sign: Sign,
    header: Header,
    payload: Vec<u8>,
    magnitude: u64,
}

impl EncodedInteger {
    /// Encode `value` in the canonical form for `sign`
    ///
    /// # Errors
    ///
    /// * `EncodeError::Domain` - `value` has the wrong sign for `sign`
    /// * `EncodeError::Range` - the magnitude needs a wider form than
    ///   `options.direct_width_limit` allows
    pub fn encode(
        sign: Sign,
        value: &IntegerValue,
        options: &EncodeOptions,
    ) -> Result<Self, EncodeError> {
        let biased = bias(sign, value)?;
        let limit = options.direct_width_limit;

        let direct = biased.to_u64().and_then(|m| {
            select_width(m, limit)
                .and_then(|width| pack_be(m, width))
                .map(|payload| (m, payload))
        });
        let Some((magnitude, payload)) = direct else {
            debug!(
                "magnitude {} of {} exceeds the {}-byte direct form",
                biased,
                value,
                limit.byte_len()
            );
            return Err(EncodeError::Range(format!(
                "value {} exceeds the {}-byte direct form; use {} with a byte string instead",
                value,
                limit.byte_len(),
                sign.bignum_tag_name()
            )));
        };

        let header = Header::canonical(sign.major_type(), magnitude);
        trace!(
            "encoded {} as major type {} with additional information {}",
            value,
            header.major_type().bits(),
            header.additional_information()
        );
        Ok(Self {
            sign,
            header,
            payload,
            magnitude,
        })
    }

    /// Rebuild an item from its additional information and payload
    ///
    /// The payload must be exactly as long as the additional information
    /// declares; nothing is padded or truncated.
    pub fn from_parts(
        sign: Sign,
        additional_information: u8,
        payload: &[u8],
    ) -> Result<Self, DecodeError> {
        let header = Header::new(sign.major_type(), additional_information)?;
        let expected = header.payload_width().byte_len();
        let mismatch = DecodeError::PayloadLengthMismatch {
            expected,
            actual: payload.len(),
        };
        if payload.len() != expected {
            return Err(mismatch);
        }
        let magnitude = match header.payload_width() {
            PayloadWidth::Inline => Some(u64::from(additional_information)),
            _ => unpack_be(payload),
        }
        .ok_or(mismatch)?;
        Ok(Self {
            sign,
            header,
            payload: payload.to_vec(),
            magnitude,
        })
    }

    /// Sign domain
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Major type (0 or 1)
    pub fn major_type(&self) -> MajorType {
        self.header.major_type()
    }

    /// Additional information (0..=27)
    pub fn additional_information(&self) -> u8 {
        self.header.additional_information()
    }

    /// Header
    pub fn header(&self) -> Header {
        self.header
    }

    /// Payload bytes, empty for inline values
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload width
    pub fn payload_width(&self) -> PayloadWidth {
        self.header.payload_width()
    }

    /// Magnitude before the sign bias is applied
    pub fn magnitude(&self) -> u64 {
        self.magnitude
    }

    /// Numeric value
    pub fn value(&self) -> IntegerValue {
        unbias(self.sign, self.magnitude())
    }

    /// Numeric value as base-10 text
    pub fn to_decimal_string(&self) -> String {
        self.value().to_decimal_string()
    }

    /// Whether this item uses the narrowest width for its magnitude
    pub fn is_canonical(&self) -> bool {
        self.header.payload_width() == PayloadWidth::smallest_for(self.magnitude())
    }

    /// Number of bytes on the wire
    pub fn encoded_len(&self) -> usize {
        1 + self.payload.len()
    }

    /// Wire bytes: header byte followed by the payload
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut bytes);
        bytes
    }

    /// Write the wire bytes to `writer`
    pub fn write_to<W: ByteWriter + ?Sized>(&self, writer: &mut W) {
        writer.write_bytes(&[self.header.to_byte()]);
        writer.write_bytes(&self.payload);
    }
}

impl fmt::Display for EncodedInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(sign: Sign, value: i64) -> Result<EncodedInteger, EncodeError> {
        EncodedInteger::encode(sign, &IntegerValue::from_i64(value), &EncodeOptions::default())
    }

    #[test]
    fn test_encode_inline() {
        let item = encode(Sign::Unsigned, 10).unwrap();
        assert_eq!(item.additional_information(), 10);
        assert!(item.payload().is_empty());
        assert_eq!(item.to_bytes(), vec![0x0a]);
    }

    #[test]
    fn test_encode_negative_one_byte() {
        let item = encode(Sign::Negative, -100).unwrap();
        assert_eq!(item.major_type(), MajorType::NegativeInteger);
        assert_eq!(item.additional_information(), 24);
        assert_eq!(item.payload(), &[0x63]);
        assert_eq!(item.to_bytes(), vec![0x38, 0x63]);
        assert_eq!(item.magnitude(), 99);
    }

    #[test]
    fn test_encode_is_canonical() {
        for value in [0i64, 23, 24, 255, 256, 65_535, 65_536, 4_294_967_295] {
            assert!(encode(Sign::Unsigned, value).unwrap().is_canonical());
            assert!(encode(Sign::Negative, -1 - value).unwrap().is_canonical());
        }
    }

    #[test]
    fn test_encode_range_message_names_tag() {
        let err = encode(Sign::Negative, -4_294_967_297).unwrap_err();
        match err {
            EncodeError::Range(msg) => assert!(msg.contains("NegativeBigIntegerTag")),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = encode(Sign::Unsigned, 4_294_967_296).unwrap_err();
        match err {
            EncodeError::Range(msg) => assert!(msg.contains("PositiveBigIntegerTag")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_encode_eight_byte_opt_in() {
        let options = EncodeOptions::with_eight_byte_form();
        let item =
            EncodedInteger::encode(Sign::Unsigned, &IntegerValue::from_u64(u64::MAX), &options)
                .unwrap();
        assert_eq!(item.additional_information(), 27);
        assert_eq!(item.payload(), &[0xFF; 8]);
    }

    #[test]
    fn test_encode_beyond_u64_is_range_error_even_with_opt_in() {
        let options = EncodeOptions::with_eight_byte_form();
        let value: IntegerValue = "-18446744073709551617".parse().unwrap();
        let err = EncodedInteger::encode(Sign::Negative, &value, &options).unwrap_err();
        assert!(matches!(err, EncodeError::Range(_)));
    }

    #[test]
    fn test_from_parts_checks_length() {
        let err = EncodedInteger::from_parts(Sign::Unsigned, 25, &[0x01]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::PayloadLengthMismatch {
                expected: 2,
                actual: 1
            }
        );

        let err = EncodedInteger::from_parts(Sign::Unsigned, 5, &[0x01]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::PayloadLengthMismatch {
                expected: 0,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_parts_rejects_reserved() {
        let err = EncodedInteger::from_parts(Sign::Negative, 28, &[]).unwrap_err();
        assert!(matches!(err, DecodeError::Header(_)));
    }

    #[test]
    fn test_from_parts_keeps_non_canonical_bytes() {
        let item = EncodedInteger::from_parts(Sign::Unsigned, 24, &[0x05]).unwrap();
        assert_eq!(item.value(), IntegerValue::from_u64(5));
        assert!(!item.is_canonical());
        assert_eq!(item.to_bytes(), vec![0x18, 0x05]);
    }

    #[test]
    fn test_from_parts_wide_payload_keeps_every_byte() {
        let item =
            EncodedInteger::from_parts(Sign::Unsigned, 27, &[0x01, 0, 0, 0, 0, 0, 0, 0x05]).unwrap();
        assert_eq!(item.magnitude(), 0x0100_0000_0000_0005);

        let err = EncodedInteger::from_parts(Sign::Unsigned, 27, &[0x01, 0, 0, 0, 0, 0, 0, 0, 0x05])
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::PayloadLengthMismatch {
                expected: 8,
                actual: 9
            }
        );
    }

    #[test]
    fn test_display_is_decimal() {
        let item = EncodedInteger::from_parts(Sign::Negative, 27, &[0xFF; 8]).unwrap();
        assert_eq!(item.to_string(), "-18446744073709551616");
        assert_eq!(item.to_decimal_string(), "-18446744073709551616");
        assert_eq!(item.encoded_len(), 9);
    }
}
