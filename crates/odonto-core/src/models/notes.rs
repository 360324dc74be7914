use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::locale::Locale;

/// Free-text oral cavity findings recorded alongside the tooth chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OralCavityNotes {
    pub mucosa: Option<String>,
    pub periodontium: Option<String>,
    pub hygiene: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OralFinding {
    Mucosa,
    Periodontium,
    Hygiene,
}

impl OralFinding {
    pub const ALL: [OralFinding; 3] = [
        OralFinding::Mucosa,
        OralFinding::Periodontium,
        OralFinding::Hygiene,
    ];

    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Pl, OralFinding::Mucosa) => "Błona śluzowa",
            (Locale::Pl, OralFinding::Periodontium) => "Przyzębie",
            (Locale::Pl, OralFinding::Hygiene) => "Higiena",
            (Locale::En, OralFinding::Mucosa) => "Mucosa",
            (Locale::En, OralFinding::Periodontium) => "Periodontium",
            (Locale::En, OralFinding::Hygiene) => "Hygiene",
        }
    }
}

impl OralCavityNotes {
    pub fn get(&self, finding: OralFinding) -> Option<&str> {
        self.slot(finding).as_deref()
    }

    /// Record a finding. Text is trimmed; blank text clears the finding.
    pub fn set(&mut self, finding: OralFinding, text: &str) {
        let text = text.trim();
        *self.slot_mut(finding) = (!text.is_empty()).then(|| text.to_string());
    }

    /// Apply the same trimming as [`set`](Self::set) to every finding.
    /// Used for notes that did not come through `set`, such as a
    /// deserialized snapshot.
    pub fn normalized(mut self) -> Self {
        for finding in OralFinding::ALL {
            if let Some(text) = self.slot_mut(finding).take() {
                self.set(finding, &text);
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        OralFinding::ALL.iter().all(|f| self.slot(*f).is_none())
    }

    fn slot(&self, finding: OralFinding) -> &Option<String> {
        match finding {
            OralFinding::Mucosa => &self.mucosa,
            OralFinding::Periodontium => &self.periodontium,
            OralFinding::Hygiene => &self.hygiene,
        }
    }

    fn slot_mut(&mut self, finding: OralFinding) -> &mut Option<String> {
        match finding {
            OralFinding::Mucosa => &mut self.mucosa,
            OralFinding::Periodontium => &mut self.periodontium,
            OralFinding::Hygiene => &mut self.hygiene,
        }
    }
}
