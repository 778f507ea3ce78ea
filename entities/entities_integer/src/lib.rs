//! Entities Layer: Integer Values
//!
//! Provides the host-side integer type shared by every other crate in the
//! workspace:
//! - Arbitrary precision signed integers backed by malachite
//! - Exact decimal text parsing and formatting
//! - Lossless conversions to and from native integer widths
//!
//! ## See Also
//!
//! - [`infrastructure_integer_encoding`](../infrastructure_integer_encoding/index.html): Wire encoding of these values

pub mod integer_value;

pub use integer_value::{IntegerValue, ParseIntegerError};
