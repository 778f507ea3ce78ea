//! Sign Bias Module
//!
//! Negative integers are stored as `magnitude = -value - 1`, so `-1` maps to
//! magnitude 0 and the most negative 8-byte value is `-2^64`. [`bias`] and
//! [`unbias`] are the two directions of that mapping, parameterized by
//! [`Sign`]. For unsigned items both are the identity.

use entities_cbor_header::MajorType;
use entities_integer::IntegerValue;

use crate::error::EncodeError;

/// Sign domain of an integer item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Non-negative values, major type 0
    Unsigned,
    /// Negative values, major type 1
    Negative,
}

impl Sign {
    /// Sign domain that `value` belongs to
    pub fn of(value: &IntegerValue) -> Self {
        if value.is_negative() {
            Sign::Negative
        } else {
            Sign::Unsigned
        }
    }

    /// Major type used on the wire
    pub const fn major_type(self) -> MajorType {
        match self {
            Sign::Unsigned => MajorType::UnsignedInteger,
            Sign::Negative => MajorType::NegativeInteger,
        }
    }

    /// Sign domain for an integer major type, `None` for every other type
    pub const fn from_major_type(major_type: MajorType) -> Option<Self> {
        if !major_type.is_integer() {
            return None;
        }
        match major_type {
            MajorType::NegativeInteger => Some(Sign::Negative),
            _ => Some(Sign::Unsigned),
        }
    }

    /// Name of the big-integer tag callers fall back to past the direct forms
    pub(crate) const fn bignum_tag_name(self) -> &'static str {
        match self {
            Sign::Unsigned => "PositiveBigIntegerTag (tag 2)",
            Sign::Negative => "NegativeBigIntegerTag (tag 3)",
        }
    }
}

/// Map a host value to the magnitude stored on the wire
///
/// # Errors
///
/// `EncodeError::Domain` when `value` lies outside the sign domain.
pub fn bias(sign: Sign, value: &IntegerValue) -> Result<IntegerValue, EncodeError> {
    match sign {
        Sign::Unsigned if value.is_negative() => Err(EncodeError::Domain(
            "value must be non-negative".to_string(),
        )),
        Sign::Unsigned => Ok(value.clone()),
        Sign::Negative if !value.is_negative() => {
            Err(EncodeError::Domain("value must be negative".to_string()))
        }
        Sign::Negative => Ok(value.negate().minus_small(1)),
    }
}

/// Map a wire magnitude back to the host value
///
/// Computed in arbitrary precision, so `unbias(Sign::Negative, u64::MAX)`
/// yields `-2^64` exactly.
pub fn unbias(sign: Sign, magnitude: u64) -> IntegerValue {
    let magnitude = IntegerValue::from_u64(magnitude);
    match sign {
        Sign::Unsigned => magnitude,
        Sign::Negative => magnitude.plus_small(1).negate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_of() {
        assert_eq!(Sign::of(&IntegerValue::from_i64(0)), Sign::Unsigned);
        assert_eq!(Sign::of(&IntegerValue::from_i64(-1)), Sign::Negative);
    }

    #[test]
    fn test_major_type_mapping() {
        assert_eq!(Sign::Unsigned.major_type(), MajorType::UnsignedInteger);
        assert_eq!(Sign::Negative.major_type(), MajorType::NegativeInteger);
        assert_eq!(
            Sign::from_major_type(MajorType::NegativeInteger),
            Some(Sign::Negative)
        );
        assert_eq!(Sign::from_major_type(MajorType::Tag), None);
    }

    #[test]
    fn test_from_major_type_covers_every_type() {
        for bits in 0..8u8 {
            let major_type = MajorType::from_bits(bits);
            let sign = Sign::from_major_type(major_type);
            assert_eq!(sign.is_some(), major_type.is_integer());
            if let Some(sign) = sign {
                assert_eq!(sign.major_type(), major_type);
            }
        }
    }

    #[test]
    fn test_bias_negative() {
        let m = bias(Sign::Negative, &IntegerValue::from_i64(-1)).unwrap();
        assert_eq!(m, IntegerValue::from_u64(0));

        let m = bias(Sign::Negative, &IntegerValue::from_i64(-256)).unwrap();
        assert_eq!(m, IntegerValue::from_u64(255));
    }

    #[test]
    fn test_bias_rejects_wrong_sign() {
        let err = bias(Sign::Negative, &IntegerValue::from_i64(0)).unwrap_err();
        assert_eq!(err, EncodeError::Domain("value must be negative".to_string()));

        let err = bias(Sign::Unsigned, &IntegerValue::from_i64(-5)).unwrap_err();
        assert_eq!(
            err,
            EncodeError::Domain("value must be non-negative".to_string())
        );
    }

    #[test]
    fn test_unbias_extremes() {
        assert_eq!(unbias(Sign::Negative, 0), IntegerValue::from_i64(-1));
        assert_eq!(
            unbias(Sign::Negative, u64::MAX).to_decimal_string(),
            "-18446744073709551616"
        );
        assert_eq!(unbias(Sign::Unsigned, u64::MAX), IntegerValue::from_u64(u64::MAX));
    }

    #[test]
    fn test_bias_inverts_unbias() {
        for magnitude in [0u64, 23, 24, 255, 65_535, 4_294_967_295, u64::MAX] {
            for sign in [Sign::Unsigned, Sign::Negative] {
                let value = unbias(sign, magnitude);
                assert_eq!(bias(sign, &value).unwrap(), IntegerValue::from_u64(magnitude));
            }
        }
    }
}
