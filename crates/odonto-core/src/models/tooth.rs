use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::locale::Locale;

pub const TEETH_PER_QUADRANT: u8 = 8;
pub const TOOTH_COUNT: usize = 32;

/// One of the four jaw sections, as seen from the patient.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Quadrant {
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::UpperLeft,
        Quadrant::LowerRight,
        Quadrant::LowerLeft,
    ];

    /// Stable short code used in tooth keys.
    pub fn code(self) -> &'static str {
        match self {
            Quadrant::UpperRight => "UR",
            Quadrant::UpperLeft => "UL",
            Quadrant::LowerRight => "LR",
            Quadrant::LowerLeft => "LL",
        }
    }

    /// Abbreviation shown to staff. Polish charts use górna/dolna + prawa/lewa.
    pub fn abbreviation(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Pl, Quadrant::UpperRight) => "GP",
            (Locale::Pl, Quadrant::UpperLeft) => "GL",
            (Locale::Pl, Quadrant::LowerRight) => "DP",
            (Locale::Pl, Quadrant::LowerLeft) => "DL",
            (Locale::En, q) => q.code(),
        }
    }
}

impl FromStr for Quadrant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quadrant::ALL
            .into_iter()
            .find(|q| q.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownQuadrant(s.to_string()))
    }
}

/// Address of one of the 32 permanent teeth: a quadrant plus a position
/// `1..=8` counted from the midline outward.
///
/// Always valid once constructed. Text form is `<quadrant code>-<position>`,
/// e.g. `UR-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToothKey {
    quadrant: Quadrant,
    position: u8,
}

impl ToothKey {
    pub fn new(quadrant: Quadrant, position: u8) -> Result<Self, CoreError> {
        if !(1..=TEETH_PER_QUADRANT).contains(&position) {
            return Err(CoreError::PositionOutOfRange(position));
        }
        Ok(Self { quadrant, position })
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    /// Dense index in `0..TOOTH_COUNT`, quadrant-major.
    pub fn index(&self) -> usize {
        self.quadrant as usize * TEETH_PER_QUADRANT as usize + (self.position - 1) as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        let per = TEETH_PER_QUADRANT as usize;
        let quadrant = *Quadrant::ALL.get(index / per)?;
        Some(Self {
            quadrant,
            position: (index % per) as u8 + 1,
        })
    }

    /// All 32 keys in index order.
    pub fn all() -> impl Iterator<Item = ToothKey> {
        (0..TOOTH_COUNT).filter_map(ToothKey::from_index)
    }

    /// Heading used in tooltips and popovers, e.g. `Ząb GP 3`.
    pub fn heading(&self, locale: Locale) -> String {
        let noun = match locale {
            Locale::Pl => "Ząb",
            Locale::En => "Tooth",
        };
        format!(
            "{noun} {} {}",
            self.quadrant.abbreviation(locale),
            self.position
        )
    }
}

impl fmt::Display for ToothKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.quadrant.code(), self.position)
    }
}

impl FromStr for ToothKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (quadrant, position) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| CoreError::InvalidToothKey(s.to_string()))?;
        let quadrant: Quadrant = quadrant.parse()?;
        let position: u8 = position
            .parse()
            .map_err(|_| CoreError::InvalidToothKey(s.to_string()))?;
        ToothKey::new(quadrant, position)
    }
}

impl TryFrom<String> for ToothKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ToothKey> for String {
    fn from(value: ToothKey) -> Self {
        value.to_string()
    }
}
