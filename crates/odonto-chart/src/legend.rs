use odonto_core::models::color::Rgb;
use odonto_core::models::condition::{BasicCondition, Condition, DegreeCondition};
use odonto_core::models::locale::Locale;
use odonto_core::models::tooth_state::ToothState;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LegendEntry {
    pub condition: Condition,
    pub code: String,
    pub label: String,
    #[ts(type = "string")]
    pub color: Rgb,
}

impl LegendEntry {
    pub fn new(condition: Condition, locale: Locale) -> Self {
        Self {
            condition,
            code: condition.code().to_string(),
            label: condition.label(locale).to_string(),
            color: condition.color(),
        }
    }
}

/// Both catalogs in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Legend {
    pub basic: Vec<LegendEntry>,
    pub degree: Vec<LegendEntry>,
}

pub fn legend(locale: Locale) -> Legend {
    Legend {
        basic: BasicCondition::ALL
            .into_iter()
            .map(|c| LegendEntry::new(c.into(), locale))
            .collect(),
        degree: DegreeCondition::ALL
            .into_iter()
            .map(|d| LegendEntry::new(d.into(), locale))
            .collect(),
    }
}

/// A selectable chip in a tooth's popover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionChip {
    #[serde(flatten)]
    pub entry: LegendEntry,
    pub selected: bool,
}

/// Chips for every catalog member, marking those active on `state`.
pub fn chips(locale: Locale, state: &ToothState) -> Vec<ConditionChip> {
    Condition::all()
        .map(|condition| ConditionChip {
            entry: LegendEntry::new(condition, locale),
            selected: state.has(condition),
        })
        .collect()
}
