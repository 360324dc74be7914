use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::{BasicCondition, Condition, ConditionCategory, DegreeCondition};

/// The two independent condition slots of one tooth.
///
/// Within a slot at most one value is active; across slots there is no
/// constraint. The default (both `None`) is the unset tooth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToothState {
    pub basic: Option<BasicCondition>,
    pub degree: Option<DegreeCondition>,
}

impl ToothState {
    pub const UNSET: ToothState = ToothState {
        basic: None,
        degree: None,
    };

    pub fn is_unset(&self) -> bool {
        self.basic.is_none() && self.degree.is_none()
    }

    pub fn get(&self, category: ConditionCategory) -> Option<Condition> {
        match category {
            ConditionCategory::Basic => self.basic.map(Condition::Basic),
            ConditionCategory::Degree => self.degree.map(Condition::Degree),
        }
    }

    /// Whether `condition` is the active value of its slot. Drives the
    /// highlighted chip in the popover.
    pub fn has(&self, condition: Condition) -> bool {
        self.get(condition.category()) == Some(condition)
    }

    /// The state after selecting `condition`: selecting the active value
    /// clears its slot, anything else replaces it. The other slot is kept.
    pub fn toggled(self, condition: Condition) -> ToothState {
        match condition {
            Condition::Basic(c) => ToothState {
                basic: if self.basic == Some(c) { None } else { Some(c) },
                ..self
            },
            Condition::Degree(d) => ToothState {
                degree: if self.degree == Some(d) { None } else { Some(d) },
                ..self
            },
        }
    }

    /// Active conditions, basic before degree.
    pub fn conditions(&self) -> impl Iterator<Item = Condition> {
        self.basic
            .map(Condition::Basic)
            .into_iter()
            .chain(self.degree.map(Condition::Degree))
    }
}
