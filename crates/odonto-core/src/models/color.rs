use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// An sRGB color. Text form is `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_hex(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = CoreError;

    /// Accepts `#rgb` and `#rrggbb`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match hex.len() {
            3 => {
                let mut nibbles = hex
                    .chars()
                    .filter_map(|c| c.to_digit(16))
                    .map(|d| (d as u8) * 17);
                match (nibbles.next(), nibbles.next(), nibbles.next()) {
                    (Some(r), Some(g), Some(b)) => Ok(Rgb::new(r, g, b)),
                    _ => Err(invalid()),
                }
            }
            6 => u32::from_str_radix(hex, 16)
                .map(Rgb::from_hex)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// The fill of a tooth cell.
///
/// A tooth carrying both a basic and a degree condition is drawn split along
/// the diagonal so that neither color is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum DisplayColor {
    Solid {
        #[ts(type = "string")]
        color: Rgb,
    },
    Split {
        #[ts(type = "string")]
        basic: Rgb,
        #[ts(type = "string")]
        degree: Rgb,
    },
}

impl DisplayColor {
    /// CSS `background` value for this fill.
    pub fn to_css(&self) -> String {
        match self {
            DisplayColor::Solid { color } => color.to_string(),
            DisplayColor::Split { basic, degree } => {
                format!("linear-gradient(135deg, {basic} 50%, {degree} 50%)")
            }
        }
    }
}
