//! Presentation data derived from tooth state.
//!
//! Pure functions of a [`ToothState`] and the chart config. The store calls
//! these on every render, so nothing here is cached.

use std::fmt;

use odonto_core::models::color::{DisplayColor, Rgb};
use odonto_core::models::locale::Locale;
use odonto_core::models::tooth::ToothKey;
use odonto_core::models::tooth_state::ToothState;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Tooltip contents for a charted tooth: the tooth heading followed by one
/// line per active condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToothLabel {
    pub heading: String,
    pub lines: Vec<String>,
}

impl ToothLabel {
    /// `None` for an unset tooth; the caller suppresses the tooltip.
    pub fn for_state(tooth: ToothKey, state: &ToothState, locale: Locale) -> Option<Self> {
        if state.is_unset() {
            return None;
        }
        Some(Self {
            heading: tooth.heading(locale),
            lines: state
                .conditions()
                .map(|c| c.label(locale).to_string())
                .collect(),
        })
    }
}

impl fmt::Display for ToothLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.heading)?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Fill for a tooth cell. A degree alone replaces the base color; both
/// conditions together produce a split fill.
pub fn display_color(state: &ToothState, base: Rgb) -> DisplayColor {
    match (state.basic, state.degree) {
        (None, None) => DisplayColor::Solid { color: base },
        (Some(basic), None) => DisplayColor::Solid {
            color: basic.color(),
        },
        (None, Some(degree)) => DisplayColor::Solid {
            color: degree.color(),
        },
        (Some(basic), Some(degree)) => DisplayColor::Split {
            basic: basic.color(),
            degree: degree.color(),
        },
    }
}

/// Everything the renderer needs to draw one tooth button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToothCell {
    #[ts(type = "string")]
    pub tooth: ToothKey,
    pub position: u8,
    pub basic_code: Option<String>,
    pub degree_code: Option<String>,
    pub fill: DisplayColor,
    /// `fill` as a CSS `background` value.
    pub css: String,
    pub label: Option<ToothLabel>,
}

impl ToothCell {
    pub fn new(tooth: ToothKey, state: &ToothState, base: Rgb, locale: Locale) -> Self {
        let fill = display_color(state, base);
        Self {
            tooth,
            position: tooth.position(),
            basic_code: state.basic.map(|c| c.code().to_string()),
            degree_code: state.degree.map(|d| d.code().to_string()),
            css: fill.to_css(),
            fill,
            label: ToothLabel::for_state(tooth, state, locale),
        }
    }
}
