use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::notes::OralCavityNotes;
use super::tooth::ToothKey;
use super::tooth_state::ToothState;
use crate::error::CoreError;

/// One charted tooth. Unset teeth never appear in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToothEntry {
    #[ts(type = "string")]
    pub tooth: ToothKey,
    pub state: ToothState,
}

/// Point-in-time view of a patient's chart, handed to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartSnapshot {
    pub patient_id: Uuid,
    pub teeth: Vec<ToothEntry>,
    pub notes: OralCavityNotes,
    pub opened_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl ChartSnapshot {
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot, normalizing notes and rejecting inconsistent ones.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let mut snapshot: ChartSnapshot = serde_json::from_str(json)?;
        snapshot.notes = snapshot.notes.normalized();
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Each tooth appears at most once and `updated_at` is not before
    /// `opened_at`.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::with_capacity(self.teeth.len());
        if let Some(entry) = self.teeth.iter().find(|e| !seen.insert(e.tooth)) {
            return Err(CoreError::DuplicateTooth(entry.tooth));
        }
        if self.updated_at < self.opened_at {
            return Err(CoreError::UpdatedBeforeOpened {
                opened_at: self.opened_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }
}
