//! Integer Value Module
//!
//! Provides arbitrary precision integer values for the encoding core.
//!
//! This module uses the `malachite` crate so that magnitudes beyond the
//! native machine word (payloads up to 2^64 - 1 and derived negative values
//! down to -2^64) are represented exactly, without any floating-point or
//! fixed-width intermediate.

use std::fmt;
use std::str::FromStr;

use malachite::Integer;

/// Arbitrary precision signed integer
///
/// Wraps malachite's `Integer`. Values are immutable from the outside; every
/// arithmetic helper returns a new value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntegerValue {
    value: Integer,
}

impl IntegerValue {
    /// Create a new integer value from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new integer value from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create from a malachite Integer
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }

    /// Check whether the value is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or does not fit in 64 bits
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Render the value as base-10 text, with a leading `-` for negatives
    pub fn to_decimal_string(&self) -> String {
        self.value.to_string()
    }

    /// Negation: -x
    pub fn negate(&self) -> Self {
        Self::from_integer(-&self.value)
    }

    /// Subtract a small unsigned integer: x - y
    pub fn minus_small(&self, y: u32) -> Self {
        Self::from_integer(&self.value - Integer::from(y))
    }

    /// Add a small unsigned integer: x + y
    pub fn plus_small(&self, y: u32) -> Self {
        Self::from_integer(&self.value + Integer::from(y))
    }
}

/// Error returned when decimal text cannot be parsed into an [`IntegerValue`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntegerError {
    input: String,
}

impl ParseIntegerError {
    /// The text that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseIntegerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid decimal integer: {:?}", self.input)
    }
}

impl std::error::Error for ParseIntegerError {}

impl FromStr for IntegerValue {
    type Err = ParseIntegerError;

    /// Parse base-10 text with an optional leading `+` or `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseIntegerError {
            input: s.to_string(),
        };

        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let digits = match digits.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        let magnitude = Integer::from_str(digits).map_err(|_| invalid())?;
        Ok(Self::from_integer(if negative { -magnitude } else { magnitude }))
    }
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl From<i64> for IntegerValue {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for IntegerValue {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for IntegerValue {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<u32> for IntegerValue {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<Integer> for IntegerValue {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_value_creation() {
        let value = IntegerValue::from_i64(12345);
        assert!(!value.is_negative());
        assert!(!value.is_zero());

        let negative = IntegerValue::from_i64(-12345);
        assert!(negative.is_negative());

        assert!(IntegerValue::from_u64(0).is_zero());
    }

    #[test]
    fn test_parse_decimal() {
        let value: IntegerValue = "18446744073709551615".parse().unwrap();
        assert_eq!(value, IntegerValue::from_u64(u64::MAX));

        let value: IntegerValue = "-100".parse().unwrap();
        assert_eq!(value, IntegerValue::from_i64(-100));

        let value: IntegerValue = "+7".parse().unwrap();
        assert_eq!(value, IntegerValue::from_i64(7));
    }

    #[test]
    fn test_from_malachite_integer() {
        let big = Integer::from(u64::MAX) + Integer::from(1u32);
        let value = IntegerValue::from(big);
        assert_eq!(value.to_decimal_string(), "18446744073709551616");
        assert_eq!(value.to_u64(), None);
        assert_eq!(value.minus_small(1), IntegerValue::from_u64(u64::MAX));
    }

    #[test]
    fn test_parse_beyond_u64() {
        let value: IntegerValue = "-18446744073709551616".parse().unwrap();
        assert_eq!(value.to_decimal_string(), "-18446744073709551616");
        assert_eq!(value.to_i64(), None);
        assert_eq!(value.to_u64(), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "-", "+", "12a", "1.5", " 1", "0x10", "--1"] {
            let err = input.parse::<IntegerValue>().unwrap_err();
            assert_eq!(err.input(), input);
        }
    }

    #[test]
    fn test_conversion() {
        let value = IntegerValue::from_i64(12345);
        assert_eq!(value.to_u64(), Some(12345));
        assert_eq!(value.to_i64(), Some(12345));

        let negative = IntegerValue::from_i64(-12345);
        assert_eq!(negative.to_u64(), None);
        assert_eq!(negative.to_i64(), Some(-12345));

        let big = IntegerValue::from_u64(u64::MAX);
        assert_eq!(big.to_i64(), None);
        assert_eq!(big.to_u64(), Some(u64::MAX));
    }

    #[test]
    fn test_small_arithmetic_past_u64() {
        let max = IntegerValue::from_u64(u64::MAX);
        let next = max.plus_small(1);
        assert_eq!(next.to_decimal_string(), "18446744073709551616");
        assert_eq!(next.negate().to_decimal_string(), "-18446744073709551616");
        assert_eq!(next.minus_small(1), max);
    }

    #[test]
    fn test_display_matches_decimal_string() {
        let value = IntegerValue::from_i64(-1000);
        assert_eq!(format!("{}", value), "-1000");
        assert_eq!(value.to_string(), value.to_decimal_string());
    }

    #[test]
    fn test_ordering() {
        let a = IntegerValue::from_i64(-1);
        let b = IntegerValue::from_u64(0);
        assert!(a < b);
    }
}
