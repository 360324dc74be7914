use jiff::Timestamp;
use odonto_core::models::condition::Condition;
use odonto_core::models::notes::{OralCavityNotes, OralFinding};
use odonto_core::models::snapshot::{ChartSnapshot, ToothEntry};
use odonto_core::models::tooth::ToothKey;
use odonto_core::models::tooth_state::ToothState;
use uuid::Uuid;

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::store::ToothConditionStore;

/// The chart a staff member has open for one patient.
///
/// Owns the tooth store and the oral cavity notes for as long as the
/// patient view is open. Every mutation bumps `updated_at`.
#[derive(Debug, Clone)]
pub struct PatientChart {
    patient_id: Uuid,
    store: ToothConditionStore,
    notes: OralCavityNotes,
    opened_at: Timestamp,
    updated_at: Timestamp,
}

impl PatientChart {
    pub fn open(patient_id: Uuid, config: ChartConfig) -> Self {
        let now = Timestamp::now();
        tracing::info!(%patient_id, "tooth chart opened");
        Self {
            patient_id,
            store: ToothConditionStore::new(config),
            notes: OralCavityNotes::default(),
            opened_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a chart from a snapshot previously handed to the frontend.
    ///
    /// Notes are trimmed as if entered through [`set_note`](Self::set_note).
    /// Fails if a tooth appears twice or `updated_at` precedes `opened_at`.
    pub fn restore(snapshot: ChartSnapshot, config: ChartConfig) -> Result<Self, ChartError> {
        snapshot.validate()?;
        let mut store = ToothConditionStore::new(config);
        for entry in &snapshot.teeth {
            store.insert(entry.tooth, entry.state);
        }
        tracing::info!(
            patient_id = %snapshot.patient_id,
            teeth = store.len(),
            "tooth chart restored"
        );
        Ok(Self {
            patient_id: snapshot.patient_id,
            store,
            notes: snapshot.notes.normalized(),
            opened_at: snapshot.opened_at,
            updated_at: snapshot.updated_at,
        })
    }

    pub fn patient_id(&self) -> Uuid {
        self.patient_id
    }

    pub fn store(&self) -> &ToothConditionStore {
        &self.store
    }

    pub fn notes(&self) -> &OralCavityNotes {
        &self.notes
    }

    pub fn opened_at(&self) -> Timestamp {
        self.opened_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn set_condition(&mut self, tooth: ToothKey, condition: impl Into<Condition>) -> ToothState {
        let state = self.store.set_condition(tooth, condition);
        self.touch();
        state
    }

    pub fn clear(&mut self, tooth: ToothKey) {
        self.store.clear(tooth);
        self.touch();
    }

    pub fn clear_all(&mut self) {
        self.store.clear_all();
        self.touch();
    }

    pub fn set_note(&mut self, finding: OralFinding, text: &str) {
        self.notes.set(finding, text);
        tracing::debug!(patient_id = %self.patient_id, ?finding, "oral cavity note updated");
        self.touch();
    }

    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            patient_id: self.patient_id,
            teeth: self
                .store
                .entries()
                .map(|(tooth, state)| ToothEntry { tooth, state })
                .collect(),
            notes: self.notes.clone(),
            opened_at: self.opened_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        // updated_at never moves backwards, even if the wall clock does.
        self.updated_at = Timestamp::now().max(self.updated_at);
    }
}
