use jiff::{SignedDuration, Timestamp};
use odonto_chart::{ChartConfig, ChartError, PatientChart};
use odonto_core::error::CoreError;
use odonto_core::models::condition::{BasicCondition, DegreeCondition};
use odonto_core::models::notes::{OralCavityNotes, OralFinding};
use odonto_core::models::snapshot::{ChartSnapshot, ToothEntry};
use odonto_core::models::tooth::{Quadrant, ToothKey};
use odonto_core::models::tooth_state::ToothState;
use uuid::Uuid;

#[test]
fn new_chart_is_empty() {
    let patient_id = Uuid::new_v4();
    let chart = PatientChart::open(patient_id, ChartConfig::default());
    assert_eq!(chart.patient_id(), patient_id);
    assert!(chart.store().is_empty());
    assert!(chart.notes().is_empty());
    assert_eq!(chart.opened_at(), chart.updated_at());

    let snapshot = chart.snapshot();
    assert!(snapshot.teeth.is_empty());
}

fn snapshot_at(opened_at: Timestamp, updated_at: Timestamp) -> ChartSnapshot {
    ChartSnapshot {
        patient_id: Uuid::new_v4(),
        teeth: Vec::new(),
        notes: OralCavityNotes::default(),
        opened_at,
        updated_at,
    }
}

#[test]
fn mutations_advance_updated_at() {
    let long_ago = Timestamp::now() - SignedDuration::from_hours(24);
    let tooth = ToothKey::new(Quadrant::UpperLeft, 5).unwrap();

    let mut chart =
        PatientChart::restore(snapshot_at(long_ago, long_ago), ChartConfig::default()).unwrap();
    chart.set_condition(tooth, BasicCondition::Caries);
    assert!(chart.updated_at() > long_ago);

    let mut chart =
        PatientChart::restore(snapshot_at(long_ago, long_ago), ChartConfig::default()).unwrap();
    chart.clear(tooth);
    assert!(chart.updated_at() > long_ago);

    let mut chart =
        PatientChart::restore(snapshot_at(long_ago, long_ago), ChartConfig::default()).unwrap();
    chart.clear_all();
    assert!(chart.updated_at() > long_ago);

    let mut chart =
        PatientChart::restore(snapshot_at(long_ago, long_ago), ChartConfig::default()).unwrap();
    chart.set_note(OralFinding::Mucosa, "bez zmian");
    assert!(chart.updated_at() > long_ago);
}

#[test]
fn updated_at_never_moves_backwards() {
    let now = Timestamp::now();
    let ahead = now + SignedDuration::from_hours(24 * 365);
    let mut chart =
        PatientChart::restore(snapshot_at(now, ahead), ChartConfig::default()).unwrap();

    chart.set_condition(
        ToothKey::new(Quadrant::LowerRight, 2).unwrap(),
        DegreeCondition::I,
    );
    assert_eq!(chart.updated_at(), ahead);
    assert_eq!(chart.opened_at(), now);
}

#[test]
fn restore_trims_blank_notes() {
    let mut snapshot = snapshot_at(Timestamp::now(), Timestamp::now());
    snapshot.notes.mucosa = Some("   ".to_string());
    snapshot.notes.hygiene = Some("  dobra ".to_string());

    let chart = PatientChart::restore(snapshot, ChartConfig::default()).unwrap();
    assert_eq!(chart.notes().get(OralFinding::Mucosa), None);
    assert_eq!(chart.notes().get(OralFinding::Hygiene), Some("dobra"));
}

#[test]
fn restore_rejects_duplicate_teeth() {
    let tooth = ToothKey::new(Quadrant::UpperRight, 3).unwrap();
    let mut snapshot = snapshot_at(Timestamp::now(), Timestamp::now());
    snapshot.teeth = vec![
        ToothEntry {
            tooth,
            state: ToothState {
                basic: Some(BasicCondition::Caries),
                degree: None,
            },
        },
        ToothEntry {
            tooth,
            state: ToothState {
                basic: None,
                degree: Some(DegreeCondition::II),
            },
        },
    ];

    let err = PatientChart::restore(snapshot, ChartConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Core(CoreError::DuplicateTooth(t)) if t == tooth
    ));
}

#[test]
fn restore_rejects_update_before_open() {
    let now = Timestamp::now();
    let year_ago = now - SignedDuration::from_hours(24 * 365);
    let err =
        PatientChart::restore(snapshot_at(now, year_ago), ChartConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        ChartError::Core(CoreError::UpdatedBeforeOpened { .. })
    ));
}

#[test]
fn snapshot_restores_through_json() {
    let mut chart = PatientChart::open(Uuid::new_v4(), ChartConfig::default());
    let a = ToothKey::new(Quadrant::UpperRight, 3).unwrap();
    let b = ToothKey::new(Quadrant::LowerLeft, 7).unwrap();
    chart.set_condition(a, BasicCondition::Caries);
    chart.set_condition(a, DegreeCondition::III);
    chart.set_condition(b, BasicCondition::Missing);
    chart.set_note(OralFinding::Mucosa, "bez zmian");
    chart.set_note(OralFinding::Hygiene, "   ");

    let snapshot = chart.snapshot();
    assert_eq!(snapshot.teeth.len(), 2);
    assert_eq!(snapshot.notes.mucosa.as_deref(), Some("bez zmian"));
    assert_eq!(snapshot.notes.hygiene, None);

    let json = snapshot.to_json().unwrap();
    assert!(json.contains("\"UR-3\""));
    let parsed = ChartSnapshot::from_json(&json).unwrap();
    assert_eq!(parsed, snapshot);

    let restored = PatientChart::restore(parsed, ChartConfig::default()).unwrap();
    assert_eq!(restored.patient_id(), chart.patient_id());
    assert_eq!(restored.store(), chart.store());
    assert_eq!(restored.notes(), chart.notes());
    assert_eq!(restored.updated_at(), chart.updated_at());
}

#[test]
fn clear_all_drops_every_tooth_but_keeps_notes() {
    let mut chart = PatientChart::open(Uuid::new_v4(), ChartConfig::default());
    for tooth in ToothKey::all().take(5) {
        chart.set_condition(tooth, BasicCondition::Filling);
    }
    chart.set_note(OralFinding::Periodontium, "krwawienie");
    chart.clear_all();
    assert!(chart.store().is_empty());
    assert_eq!(chart.notes().get(OralFinding::Periodontium), Some("krwawienie"));
}
