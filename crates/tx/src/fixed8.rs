//! Fixed-point amounts with 8 decimals of precision.

use std::fmt;

use lyra_config::FEE_PRECISION;
use lyra_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::{Error, Result};

/// An asset amount stored as `value x 10^8` in a signed 64-bit integer.
/// The wire form is the raw integer, little-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed8(i64);

impl Fixed8 {
    pub const ZERO: Fixed8 = Fixed8(0);

    /// Wraps a raw scaled integer.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// A whole number of asset units.
    pub fn from_units(units: i64) -> Result<Self> {
        units
            .checked_mul(FEE_PRECISION)
            .map(Self)
            .ok_or(Error::Overflow)
    }

    /// Converts a display value, rounding to the nearest representable
    /// amount. Rejects non-finite input and anything outside the i64 range.
    pub fn from_decimal(value: f64) -> Result<Self> {
        let scaled = (value * FEE_PRECISION as f64).round();
        if !scaled.is_finite() || scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
            return Err(Error::Overflow);
        }
        Ok(Self(scaled as i64))
    }

    pub const fn raw(self) -> i64 {
        self.0
    }

    /// The display value. Lossy above 2^53 raw units; for exact math stay
    /// on the raw integer.
    pub fn to_decimal(self) -> f64 {
        self.0 as f64 / FEE_PRECISION as f64
    }

    /// Rounds up to the next whole asset unit. Committed execution fees use
    /// this so a fractional cost can never under-fund the virtual machine.
    pub fn ceil_to_unit(self) -> Result<Self> {
        let units = self
            .0
            .checked_add(FEE_PRECISION - 1)
            .ok_or(Error::Overflow)?
            .div_euclid(FEE_PRECISION);
        units
            .checked_mul(FEE_PRECISION)
            .map(Self)
            .ok_or(Error::Overflow)
    }

    /// The whole-unit part of the amount, truncated toward zero.
    pub const fn whole_units(self) -> i64 {
        self.0 / FEE_PRECISION
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / FEE_PRECISION as u64;
        let frac = abs % FEE_PRECISION as u64;
        if frac == 0 {
            write!(f, "{sign}{units}")
        } else {
            let mut digits = format!("{frac:08}");
            while digits.ends_with('0') {
                digits.pop();
            }
            write!(f, "{sign}{units}.{digits}")
        }
    }
}

impl Serializable for Fixed8 {
    fn size(&self) -> usize {
        8
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_i64(self.0)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_i64()?))
    }
}
