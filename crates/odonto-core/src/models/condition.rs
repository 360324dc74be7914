use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{self, CatalogEntry};
use crate::error::CoreError;
use crate::models::color::Rgb;
use crate::models::locale::Locale;

/// Primary clinical state of a tooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BasicCondition {
    Unremarkable,
    Missing,
    Crown,
    Calculus,
    Caries,
    ToExtract,
    Filling,
}

impl BasicCondition {
    pub const ALL: [BasicCondition; 7] = [
        BasicCondition::Unremarkable,
        BasicCondition::Missing,
        BasicCondition::Crown,
        BasicCondition::Calculus,
        BasicCondition::Caries,
        BasicCondition::ToExtract,
        BasicCondition::Filling,
    ];

    pub fn entry(self) -> &'static CatalogEntry {
        &catalog::BASIC[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.entry().code
    }

    pub fn label(self, locale: Locale) -> &'static str {
        self.entry().label(locale)
    }

    pub fn color(self) -> Rgb {
        self.entry().color
    }
}

/// Severity grade layered on top of a basic condition. Ordered mildest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum DegreeCondition {
    I,
    II,
    III,
    IV,
    V,
}

impl DegreeCondition {
    pub const ALL: [DegreeCondition; 5] = [
        DegreeCondition::I,
        DegreeCondition::II,
        DegreeCondition::III,
        DegreeCondition::IV,
        DegreeCondition::V,
    ];

    pub fn entry(self) -> &'static CatalogEntry {
        &catalog::DEGREE[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.entry().code
    }

    pub fn label(self, locale: Locale) -> &'static str {
        self.entry().label(locale)
    }

    pub fn color(self) -> Rgb {
        self.entry().color
    }
}

/// Which slot of a tooth a condition occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConditionCategory {
    Basic,
    Degree,
}

/// Any member of either catalog. This is what a condition chip carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "category", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    Basic(BasicCondition),
    Degree(DegreeCondition),
}

impl Condition {
    pub fn category(self) -> ConditionCategory {
        match self {
            Condition::Basic(_) => ConditionCategory::Basic,
            Condition::Degree(_) => ConditionCategory::Degree,
        }
    }

    pub fn entry(self) -> &'static CatalogEntry {
        match self {
            Condition::Basic(c) => c.entry(),
            Condition::Degree(d) => d.entry(),
        }
    }

    pub fn code(self) -> &'static str {
        self.entry().code
    }

    pub fn label(self, locale: Locale) -> &'static str {
        self.entry().label(locale)
    }

    pub fn color(self) -> Rgb {
        self.entry().color
    }

    /// Every catalog member, basic conditions first.
    pub fn all() -> impl Iterator<Item = Condition> {
        BasicCondition::ALL
            .into_iter()
            .map(Condition::Basic)
            .chain(DegreeCondition::ALL.into_iter().map(Condition::Degree))
    }
}

impl From<BasicCondition> for Condition {
    fn from(value: BasicCondition) -> Self {
        Condition::Basic(value)
    }
}

impl From<DegreeCondition> for Condition {
    fn from(value: DegreeCondition) -> Self {
        Condition::Degree(value)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Condition {
    type Err = CoreError;

    /// Parse a chart code (`c`, `w`, `III`, ...). Codes are case-sensitive:
    /// `v` is "to extract" while `V` is degree five.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Condition::all()
            .find(|c| c.code() == code)
            .ok_or_else(|| CoreError::UnknownCondition(s.to_string()))
    }
}
