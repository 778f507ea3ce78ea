//! Payload Width Module
//!
//! Maps additional information values to the number of payload bytes that
//! follow the initial byte, and back.
//!
//! | Additional information | Width    | Payload bytes | Largest magnitude       |
//! |------------------------|----------|---------------|-------------------------|
//! | 0..=23                 | `Inline` | 0             | 23                      |
//! | 24                     | `One`    | 1             | 0xFF                    |
//! | 25                     | `Two`    | 2             | 0xFFFF                  |
//! | 26                     | `Four`   | 4             | 0xFFFF_FFFF             |
//! | 27                     | `Eight`  | 8             | 0xFFFF_FFFF_FFFF_FFFF   |

use crate::header::HeaderError;
use crate::{INDEFINITE_LENGTH, MAX_ADDITIONAL_INFORMATION, MAX_INLINE_VALUE};

/// Width of the payload following an integer header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PayloadWidth {
    /// Value lives in the additional information field, no payload
    Inline,
    /// One payload byte (additional information 24)
    One,
    /// Two payload bytes (additional information 25)
    Two,
    /// Four payload bytes (additional information 26)
    Four,
    /// Eight payload bytes (additional information 27)
    Eight,
}

impl PayloadWidth {
    /// All widths, narrowest first
    pub const ALL: [PayloadWidth; 5] = [
        PayloadWidth::Inline,
        PayloadWidth::One,
        PayloadWidth::Two,
        PayloadWidth::Four,
        PayloadWidth::Eight,
    ];

    /// Width announced by an additional information value
    pub const fn from_additional_information(
        additional_information: u8,
    ) -> Result<Self, HeaderError> {
        match additional_information {
            0..=MAX_INLINE_VALUE => Ok(PayloadWidth::Inline),
            24 => Ok(PayloadWidth::One),
            25 => Ok(PayloadWidth::Two),
            26 => Ok(PayloadWidth::Four),
            MAX_ADDITIONAL_INFORMATION => Ok(PayloadWidth::Eight),
            INDEFINITE_LENGTH => Err(HeaderError::IndefiniteLength),
            other => Err(HeaderError::ReservedAdditionalInformation(other)),
        }
    }

    /// Additional information value announcing this width
    ///
    /// `Inline` has no fixed value (the field holds the value itself).
    pub const fn additional_information(self) -> Option<u8> {
        match self {
            PayloadWidth::Inline => None,
            PayloadWidth::One => Some(24),
            PayloadWidth::Two => Some(25),
            PayloadWidth::Four => Some(26),
            PayloadWidth::Eight => Some(27),
        }
    }

    /// Number of payload bytes
    pub const fn byte_len(self) -> usize {
        match self {
            PayloadWidth::Inline => 0,
            PayloadWidth::One => 1,
            PayloadWidth::Two => 2,
            PayloadWidth::Four => 4,
            PayloadWidth::Eight => 8,
        }
    }

    /// Largest magnitude representable at this width
    pub const fn max_magnitude(self) -> u64 {
        match self {
            PayloadWidth::Inline => MAX_INLINE_VALUE as u64,
            PayloadWidth::One => 0xFF,
            PayloadWidth::Two => 0xFFFF,
            PayloadWidth::Four => 0xFFFF_FFFF,
            PayloadWidth::Eight => u64::MAX,
        }
    }

    /// Narrowest width able to hold `magnitude`
    pub const fn smallest_for(magnitude: u64) -> Self {
        if magnitude <= PayloadWidth::Inline.max_magnitude() {
            PayloadWidth::Inline
        } else if magnitude <= PayloadWidth::One.max_magnitude() {
            PayloadWidth::One
        } else if magnitude <= PayloadWidth::Two.max_magnitude() {
            PayloadWidth::Two
        } else if magnitude <= PayloadWidth::Four.max_magnitude() {
            PayloadWidth::Four
        } else {
            PayloadWidth::Eight
        }
    }
}
