use odonto_core::models::color::DisplayColor;
use odonto_core::models::condition::Condition;
use odonto_core::models::tooth::{TOOTH_COUNT, ToothKey};
use odonto_core::models::tooth_state::ToothState;

use crate::config::ChartConfig;
use crate::display::{self, ToothCell, ToothLabel};

/// Per-tooth condition state for one chart.
///
/// Backed by a fixed 32-slot arena indexed by [`ToothKey::index`]. An unset
/// slot is indistinguishable from a tooth that was never touched. Every
/// operation is total; invalid teeth and conditions are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToothConditionStore {
    teeth: [ToothState; TOOTH_COUNT],
    config: ChartConfig,
}

impl Default for ToothConditionStore {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

impl ToothConditionStore {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            teeth: [ToothState::UNSET; TOOTH_COUNT],
            config,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Select a condition chip on `tooth`.
    ///
    /// Selecting the value already active in its category clears that
    /// category; any other value replaces it. The other category is never
    /// touched. Returns the resulting state.
    pub fn set_condition(&mut self, tooth: ToothKey, condition: impl Into<Condition>) -> ToothState {
        let condition = condition.into();
        let slot = &mut self.teeth[tooth.index()];
        let previous = *slot;
        *slot = previous.toggled(condition);
        tracing::debug!(
            tooth = %tooth,
            condition = %condition,
            toggled_off = previous.has(condition),
            basic = ?slot.basic,
            degree = ?slot.degree,
            "tooth condition selected"
        );
        *slot
    }

    /// Reset both categories of `tooth`. Idempotent.
    pub fn clear(&mut self, tooth: ToothKey) {
        self.teeth[tooth.index()] = ToothState::UNSET;
        tracing::debug!(tooth = %tooth, "tooth cleared");
    }

    pub fn clear_all(&mut self) {
        self.teeth = [ToothState::UNSET; TOOTH_COUNT];
        tracing::debug!("chart cleared");
    }

    /// Overwrite the whole state of `tooth`.
    pub fn insert(&mut self, tooth: ToothKey, state: ToothState) {
        self.teeth[tooth.index()] = state;
    }

    pub fn state(&self, tooth: ToothKey) -> ToothState {
        self.teeth[tooth.index()]
    }

    pub fn display_color(&self, tooth: ToothKey) -> DisplayColor {
        display::display_color(&self.state(tooth), self.config.base_color)
    }

    /// Tooltip text for `tooth`, or `None` when it has no conditions.
    pub fn label(&self, tooth: ToothKey) -> Option<ToothLabel> {
        ToothLabel::for_state(tooth, &self.state(tooth), self.config.locale)
    }

    pub fn cell(&self, tooth: ToothKey) -> ToothCell {
        ToothCell::new(
            tooth,
            &self.state(tooth),
            self.config.base_color,
            self.config.locale,
        )
    }

    /// Cells for all 32 teeth in key order.
    pub fn cells(&self) -> Vec<ToothCell> {
        ToothKey::all().map(|tooth| self.cell(tooth)).collect()
    }

    /// Teeth carrying at least one condition, in key order.
    pub fn entries(&self) -> impl Iterator<Item = (ToothKey, ToothState)> + '_ {
        ToothKey::all()
            .map(|tooth| (tooth, self.state(tooth)))
            .filter(|(_, state)| !state.is_unset())
    }

    /// Number of teeth carrying at least one condition.
    pub fn len(&self) -> usize {
        self.teeth.iter().filter(|s| !s.is_unset()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
