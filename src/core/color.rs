use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{OptionsError, OptionsResult};

/// RGBA color with 8-bit channels and a normalized 0..=1 alpha.
///
/// Opaque colors serialize as `#RRGGBB`, translucent ones as `rgba(r, g, b, a)`,
/// both of which the charting library accepts anywhere a color is expected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> OptionsResult<Self> {
        let digits = input
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| OptionsError::InvalidColor(format!("`{input}` must start with `#`")))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OptionsError::InvalidColor(format!(
                "`{input}` contains non-hex characters"
            )));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| {
                OptionsError::InvalidColor(format!("`{input}` contains non-hex characters"))
            })
        };

        match digits.len() {
            3 => {
                let expand = |index: usize| channel(&digits[index..=index]).map(|nibble| nibble * 17);
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 | 8 => {
                let red = channel(&digits[0..2])?;
                let green = channel(&digits[2..4])?;
                let blue = channel(&digits[4..6])?;
                let alpha = if digits.len() == 8 {
                    f64::from(channel(&digits[6..8])?) / 255.0
                } else {
                    1.0
                };
                Ok(Self::rgba(red, green, blue, alpha))
            }
            len => Err(OptionsError::InvalidColor(format!(
                "`{input}` has {len} hex digits, expected 3, 6 or 8"
            ))),
        }
    }

    pub fn validate(self) -> OptionsResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(OptionsError::InvalidColor(
                "alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    fn parse_functional(input: &str) -> OptionsResult<Self> {
        let (name, rest) = input
            .split_once('(')
            .ok_or_else(|| OptionsError::InvalidColor(format!("`{input}` is not a color")))?;
        let body = rest
            .strip_suffix(')')
            .ok_or_else(|| OptionsError::InvalidColor(format!("`{input}` is missing `)`")))?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();

        let expected = match name.trim() {
            "rgb" => 3,
            "rgba" => 4,
            other => {
                return Err(OptionsError::InvalidColor(format!(
                    "unsupported color function `{other}`"
                )));
            }
        };
        if parts.len() != expected {
            return Err(OptionsError::InvalidColor(format!(
                "`{input}` must have {expected} components"
            )));
        }

        let channel = |value: &str| {
            value.parse::<u8>().map_err(|_| {
                OptionsError::InvalidColor(format!("channel `{value}` must be an integer 0..=255"))
            })
        };
        let alpha = match parts.get(3) {
            Some(value) => value.parse::<f64>().map_err(|_| {
                OptionsError::InvalidColor(format!("alpha `{value}` must be a number"))
            })?,
            None => 1.0,
        };

        let color = Self::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha);
        color.validate()?;
        Ok(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl FromStr for Color {
    type Err = OptionsError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.starts_with('#') {
            Self::from_hex(trimmed)
        } else {
            Self::parse_functional(trimmed)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.validate().map_err(S::Error::custom)?;
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
