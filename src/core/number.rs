use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{OptionsError, OptionsResult};

/// A JSON number as the charting library reads it.
///
/// Integers keep their integral form on the wire (`5`, not `5.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Epoch milliseconds, the unit datetime axes expect.
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self::Int(time.timestamp_millis())
    }

    pub fn try_from_decimal(value: Decimal) -> OptionsResult<Self> {
        if value.fract().is_zero() {
            if let Some(int) = value.to_i64() {
                return Ok(Self::Int(int));
            }
        }
        value.to_f64().map(Self::Float).ok_or_else(|| {
            OptionsError::InvalidData(format!("decimal {value} cannot be represented as f64"))
        })
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    pub fn validate(self) -> OptionsResult<()> {
        match self {
            Self::Float(value) if !value.is_finite() => Err(OptionsError::InvalidData(format!(
                "number {value} must be finite"
            ))),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<DateTime<Utc>> for Number {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_datetime(value)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Int(value) => serializer.serialize_i64(value),
            Self::Float(value) if value.is_finite() => serializer.serialize_f64(value),
            Self::Float(value) => Err(S::Error::custom(format!(
                "number {value} must be finite"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Number::deserialize(deserializer)?;
        if let Some(int) = value.as_i64() {
            return Ok(Self::Int(int));
        }
        value
            .as_f64()
            .map(Self::Float)
            .ok_or_else(|| serde::de::Error::custom(format!("number {value} is out of range")))
    }
}
