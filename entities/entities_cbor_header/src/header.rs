//! Header Module
//!
//! The initial byte of an integer item: `(major_type << 5) | additional_information`.

use std::fmt;

use crate::major_type::MajorType;
use crate::width::PayloadWidth;

/// Errors raised while building or parsing a header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// Additional information 28..=30 is reserved by the format
    ReservedAdditionalInformation(u8),
    /// Additional information 31 (indefinite length) is not supported
    IndefiniteLength,
    /// Additional information does not fit in five bits
    AdditionalInformationOutOfRange(u8),
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::ReservedAdditionalInformation(ai) => {
                write!(f, "reserved additional information value {}", ai)
            }
            HeaderError::IndefiniteLength => write!(f, "indefinite-length items are not supported"),
            HeaderError::AdditionalInformationOutOfRange(ai) => {
                write!(f, "additional information {} does not fit in five bits", ai)
            }
        }
    }
}

impl std::error::Error for HeaderError {}

/// Validated initial byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    major_type: MajorType,
    additional_information: u8,
    width: PayloadWidth,
}

impl Header {
    /// Create a header, rejecting additional information above 27
    pub fn new(major_type: MajorType, additional_information: u8) -> Result<Self, HeaderError> {
        if additional_information > 0b1_1111 {
            return Err(HeaderError::AdditionalInformationOutOfRange(additional_information));
        }
        let width = PayloadWidth::from_additional_information(additional_information)?;
        Ok(Self {
            major_type,
            additional_information,
            width,
        })
    }

    /// Shortest header able to carry `magnitude`
    pub const fn canonical(major_type: MajorType, magnitude: u64) -> Self {
        let width = PayloadWidth::smallest_for(magnitude);
        let additional_information = match width.additional_information() {
            Some(ai) => ai,
            None => magnitude as u8,
        };
        Self {
            major_type,
            additional_information,
            width,
        }
    }

    /// Parse the initial byte read off the wire
    pub fn from_byte(byte: u8) -> Result<Self, HeaderError> {
        Self::new(MajorType::from_bits(byte >> 5), byte & 0b1_1111)
    }

    /// Serialize to the initial byte
    pub const fn to_byte(self) -> u8 {
        (self.major_type.bits() << 5) | self.additional_information
    }

    /// Major type
    pub const fn major_type(self) -> MajorType {
        self.major_type
    }

    /// Additional information field (0..=27)
    pub const fn additional_information(self) -> u8 {
        self.additional_information
    }

    /// Payload width implied by the additional information
    pub const fn payload_width(self) -> PayloadWidth {
        self.width
    }
}
