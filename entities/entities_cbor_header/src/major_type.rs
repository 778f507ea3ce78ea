//! Major Type Module
//!
//! The 3-bit category tag in the high bits of the initial byte.

/// CBOR major type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum MajorType {
    /// Major type 0: unsigned integer
    UnsignedInteger = 0,
    /// Major type 1: negative integer, stored as `-1 - magnitude`
    NegativeInteger = 1,
    /// Major type 2: byte string
    ByteString = 2,
    /// Major type 3: UTF-8 text string
    TextString = 3,
    /// Major type 4: array
    Array = 4,
    /// Major type 5: map
    Map = 5,
    /// Major type 6: tagged item
    Tag = 6,
    /// Major type 7: simple values and floats
    SimpleOrFloat = 7,
}

impl MajorType {
    /// Build a major type from its 3-bit value
    ///
    /// Only the low three bits of `bits` are considered.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => MajorType::UnsignedInteger,
            1 => MajorType::NegativeInteger,
            2 => MajorType::ByteString,
            3 => MajorType::TextString,
            4 => MajorType::Array,
            5 => MajorType::Map,
            6 => MajorType::Tag,
            _ => MajorType::SimpleOrFloat,
        }
    }

    /// The 3-bit wire value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Whether this major type carries an integer (types 0 and 1)
    pub const fn is_integer(self) -> bool {
        matches!(self, MajorType::UnsignedInteger | MajorType::NegativeInteger)
    }
}
