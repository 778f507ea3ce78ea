//! Dispatch Module
//!
//! Routes integer items to the unsigned or signed codec by major type, and
//! drives a [`ByteReader`] through header and payload.

use entities_cbor_header::MajorType;
use entities_integer::IntegerValue;
use log::{debug, trace};

use crate::bias::Sign;
use crate::encoded_integer::EncodedInteger;
use crate::error::{DecodeError, EncodeError};
use crate::options::{DecodeOptions, EncodeOptions};
use crate::signed_codec::SignedCodec;
use crate::stream::{ByteReader, SliceReader};
use crate::unsigned_codec::UnsignedCodec;

/// Decode the value of an integer item whose header is already parsed
///
/// # Errors
///
/// `DecodeError::UnexpectedMajorType` for anything other than major type 0
/// or 1, plus every error of the selected codec.
pub fn decode(
    major_type: MajorType,
    additional_information: u8,
    payload: &[u8],
) -> Result<IntegerValue, DecodeError> {
    match major_type {
        MajorType::UnsignedInteger => UnsignedCodec::decode(additional_information, payload),
        MajorType::NegativeInteger => SignedCodec::decode(additional_information, payload),
        other => Err(DecodeError::UnexpectedMajorType(other.bits())),
    }
}

/// Read one integer item from `reader`
///
/// Consumes the header byte and exactly the payload it announces.
pub fn decode_item<R: ByteReader + ?Sized>(
    reader: &mut R,
    options: &DecodeOptions,
) -> Result<EncodedInteger, DecodeError> {
    let start = reader.position();
    let header = reader.read_header()?;
    let Some(sign) = Sign::from_major_type(header.major_type()) else {
        debug!(
            "major type {} at offset {} is not an integer",
            header.major_type().bits(),
            start
        );
        return Err(DecodeError::UnexpectedMajorType(header.major_type().bits()));
    };

    let payload = reader.read_exact(header.payload_width().byte_len())?;
    let item = EncodedInteger::from_parts(sign, header.additional_information(), payload)?;

    if options.require_canonical && !item.is_canonical() {
        debug!(
            "rejecting non-canonical item at offset {}: additional information {}",
            start,
            item.additional_information()
        );
        return Err(DecodeError::NonCanonical {
            additional_information: item.additional_information(),
            magnitude: item.magnitude(),
        });
    }

    trace!(
        "decoded {} from {} bytes at offset {}",
        item,
        item.encoded_len(),
        start
    );
    Ok(item)
}

/// Decode a buffer holding exactly one integer item
pub fn decode_slice(bytes: &[u8], options: &DecodeOptions) -> Result<EncodedInteger, DecodeError> {
    let mut reader = SliceReader::new(bytes);
    let item = decode_item(&mut reader, options)?;
    match reader.remaining() {
        0 => Ok(item),
        trailing => Err(DecodeError::TrailingBytes(trailing)),
    }
}

/// Encode a value of either sign, picking the major type from the sign
pub fn encode(value: &IntegerValue, options: &EncodeOptions) -> Result<EncodedInteger, EncodeError> {
    match Sign::of(value) {
        Sign::Unsigned => UnsignedCodec::encode_with(value, options),
        Sign::Negative => SignedCodec::encode_with(value, options),
    }
}
