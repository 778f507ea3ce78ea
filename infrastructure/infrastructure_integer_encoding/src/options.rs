//! Codec Options
//!
//! Knobs for the encode and decode paths. The defaults give the permissive
//! decoder and the restrictive encoder: decoding accepts every well-formed
//! width, encoding stops at the 4-byte direct form.

use entities_cbor_header::PayloadWidth;

/// Encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Widest direct form the encoder may emit
    ///
    /// Magnitudes above `direct_width_limit.max_magnitude()` are rejected with
    /// a range error.
    pub direct_width_limit: PayloadWidth,
}

impl EncodeOptions {
    /// Options that also allow the 8-byte direct form (additional information 27)
    pub const fn with_eight_byte_form() -> Self {
        Self {
            direct_width_limit: PayloadWidth::Eight,
        }
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            direct_width_limit: PayloadWidth::Four,
        }
    }
}

/// Decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Reject items that use a wider form than their magnitude needs
    pub require_canonical: bool,
}

impl DecodeOptions {
    /// Options for strict canonical input
    pub const fn strict() -> Self {
        Self {
            require_canonical: true,
        }
    }
}
