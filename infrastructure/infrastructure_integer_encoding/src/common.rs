//! Common Encoding/Decoding Utilities
//!
//! Shared helpers used by both the unsigned and the signed codec:
//! - Width selection (the canonical ladder, capped by an encoder limit)
//! - Big-endian packing of a magnitude into a fixed-width payload
//! - Big-endian unpacking of a payload back into a magnitude
//!
//! ## Encoding Format
//!
//! The payload is the magnitude in network byte order, exactly
//! `PayloadWidth::byte_len()` bytes long, with no padding or length prefix.

use entities_cbor_header::PayloadWidth;

/// Pick the narrowest width for `magnitude`, or `None` if that width is
/// wider than `limit`
///
/// Thresholds are checked in order: `< 24`, `<= 0xFF`, `<= 0xFFFF`,
/// `<= 0xFFFF_FFFF`, `<= 0xFFFF_FFFF_FFFF_FFFF`.
pub fn select_width(magnitude: u64, limit: PayloadWidth) -> Option<PayloadWidth> {
    let width = PayloadWidth::smallest_for(magnitude);
    (width <= limit).then_some(width)
}

/// Pack `magnitude` into a big-endian payload of `width` bytes
///
/// Returns `None` if `magnitude` does not fit in `width`.
pub fn pack_be(magnitude: u64, width: PayloadWidth) -> Option<Vec<u8>> {
    if magnitude > width.max_magnitude() {
        return None;
    }
    let bytes = magnitude.to_be_bytes();
    Some(bytes[bytes.len() - width.byte_len()..].to_vec())
}

/// Read a big-endian unsigned magnitude
///
/// Returns `None` for payloads longer than eight bytes.
pub fn unpack_be(payload: &[u8]) -> Option<u64> {
    if payload.len() > 8 {
        return None;
    }
    Some(
        payload
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte)),
    )
}
