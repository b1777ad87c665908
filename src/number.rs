//! Numeric kinds accepted as range bounds.
//!
//! A range is configured with two [`RangeValue`]s. The kind of the lower bound
//! decides the [`NumberKind`] every selected value is reported in, so a range
//! built from `i32` bounds reports `i32` selections even though all internal
//! arithmetic happens on `f64`. Decimal values are arbitrary precision
//! ([`BigDecimal`]) and only pass through `f64` for track arithmetic.

#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

use std::fmt;
use std::str::FromStr;

pub use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekBarError};

/// The closed set of numeric representations a range can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberKind {
    #[serde(rename = "i64")]
    Long,
    #[serde(rename = "f64")]
    Double,
    #[serde(rename = "i32")]
    Int,
    #[serde(rename = "f32")]
    Float,
    #[serde(rename = "i16")]
    Short,
    #[serde(rename = "i8")]
    Byte,
    #[serde(rename = "decimal")]
    Decimal,
}

impl NumberKind {
    /// Short name used in configuration and error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Long => "i64",
            Self::Double => "f64",
            Self::Int => "i32",
            Self::Float => "f32",
            Self::Short => "i16",
            Self::Byte => "i8",
            Self::Decimal => "decimal",
        }
    }

    /// Convert an `f64` into this kind. Integer kinds truncate toward zero.
    /// A non-finite value has no decimal form and stays a `Double` for the
    /// decimal kind.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn cast(self, value: f64) -> RangeValue {
        match self {
            Self::Long => RangeValue::Long(value as i64),
            Self::Double => RangeValue::Double(value),
            Self::Int => RangeValue::Int(value as i32),
            Self::Float => RangeValue::Float(value as f32),
            Self::Short => RangeValue::Short(value as i16),
            Self::Byte => RangeValue::Byte(value as i8),
            Self::Decimal => decimal_from_f64(value).map_or(RangeValue::Double(value), RangeValue::Decimal),
        }
    }

    /// Parse `text` as a value of this kind.
    pub fn parse_value(self, text: &str) -> Result<RangeValue> {
        let trimmed = text.trim();
        let invalid = || SeekBarError::InvalidNumber {
            kind: self.name().to_string(),
            text: text.to_string(),
        };
        match self {
            Self::Long => trimmed.parse().map(RangeValue::Long).map_err(|_| invalid()),
            Self::Double => trimmed.parse().map(RangeValue::Double).map_err(|_| invalid()),
            Self::Int => trimmed.parse().map(RangeValue::Int).map_err(|_| invalid()),
            Self::Float => trimmed.parse().map(RangeValue::Float).map_err(|_| invalid()),
            Self::Short => trimmed.parse().map(RangeValue::Short).map_err(|_| invalid()),
            Self::Byte => trimmed.parse().map(RangeValue::Byte).map_err(|_| invalid()),
            Self::Decimal => trimmed.parse().map(RangeValue::Decimal).map_err(|_| invalid()),
        }
    }
}

impl FromStr for NumberKind {
    type Err = SeekBarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i64" | "long" => Ok(Self::Long),
            "f64" | "double" => Ok(Self::Double),
            "i32" | "int" | "integer" => Ok(Self::Int),
            "f32" | "float" => Ok(Self::Float),
            "i16" | "short" => Ok(Self::Short),
            "i8" | "byte" => Ok(Self::Byte),
            "decimal" | "bigdecimal" => Ok(Self::Decimal),
            _ => Err(SeekBarError::UnsupportedNumericKind(s.to_string())),
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A range bound or selected value, tagged with its representation.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeValue {
    Long(i64),
    Double(f64),
    Int(i32),
    Float(f32),
    Short(i16),
    Byte(i8),
    Decimal(BigDecimal),
}

impl RangeValue {
    /// Parse a value from a kind name (`"i32"`, `"f64"`, `"decimal"`, ...) and its text.
    pub fn parse(kind: &str, text: &str) -> Result<Self> {
        kind.parse::<NumberKind>()?.parse_value(text)
    }

    #[must_use]
    pub fn kind(&self) -> NumberKind {
        match self {
            Self::Long(_) => NumberKind::Long,
            Self::Double(_) => NumberKind::Double,
            Self::Int(_) => NumberKind::Int,
            Self::Float(_) => NumberKind::Float,
            Self::Short(_) => NumberKind::Short,
            Self::Byte(_) => NumberKind::Byte,
            Self::Decimal(_) => NumberKind::Decimal,
        }
    }

    /// Value as `f64`. Decimals beyond the `f64` range become infinite.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Long(v) => *v as f64,
            Self::Double(v) => *v,
            Self::Int(v) => f64::from(*v),
            Self::Float(v) => f64::from(*v),
            Self::Short(v) => f64::from(*v),
            Self::Byte(v) => f64::from(*v),
            Self::Decimal(v) => decimal_to_f64(v),
        }
    }

    /// Integer part of the value, truncated toward zero and saturated at the
    /// `i64` bounds.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        match self {
            Self::Long(v) => *v,
            Self::Int(v) => i64::from(*v),
            Self::Short(v) => i64::from(*v),
            Self::Byte(v) => i64::from(*v),
            Self::Double(_) | Self::Float(_) | Self::Decimal(_) => self.to_f64() as i64,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_f64().is_finite()
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for RangeValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f64> for RangeValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<i32> for RangeValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for RangeValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<i16> for RangeValue {
    fn from(v: i16) -> Self {
        Self::Short(v)
    }
}

impl From<i8> for RangeValue {
    fn from(v: i8) -> Self {
        Self::Byte(v)
    }
}

impl From<BigDecimal> for RangeValue {
    fn from(v: BigDecimal) -> Self {
        Self::Decimal(v)
    }
}

/// Shortest decimal that reads back as `value`, at full precision.
///
/// Fails with [`SeekBarError::NonFiniteBound`] for NaN and infinities.
pub fn decimal_from_f64(value: f64) -> Result<BigDecimal> {
    if !value.is_finite() {
        return Err(SeekBarError::NonFiniteBound);
    }
    // f64 Display never uses exponent notation and round-trips exactly.
    let text = value.to_string();
    text.parse()
        .map_err(|_| SeekBarError::InvalidNumber { kind: NumberKind::Decimal.name().to_string(), text })
}

fn decimal_to_f64(value: &BigDecimal) -> f64 {
    value
        .to_f64()
        .unwrap_or_else(|| if *value < BigDecimal::zero() { f64::NEG_INFINITY } else { f64::INFINITY })
}
