use odonto_chart::{ChartConfig, ToothConditionStore};
use odonto_core::models::color::{DisplayColor, Rgb};
use odonto_core::models::condition::{BasicCondition, Condition, DegreeCondition};
use odonto_core::models::locale::Locale;
use odonto_core::models::tooth::{Quadrant, TOOTH_COUNT, ToothKey};
use odonto_core::models::tooth_state::ToothState;
use proptest::prelude::*;

fn key(quadrant: Quadrant, position: u8) -> ToothKey {
    ToothKey::new(quadrant, position).unwrap()
}

#[test]
fn caries_then_degree_then_caries_again() {
    let mut store = ToothConditionStore::default();
    let tooth = key(Quadrant::UpperRight, 3);

    assert_eq!(store.label(tooth), None);

    store.set_condition(tooth, BasicCondition::Caries);
    let label = store.label(tooth).unwrap();
    assert_eq!(label.heading, "Ząb GP 3");
    assert_eq!(label.lines, vec!["Próchnica"]);

    store.set_condition(tooth, DegreeCondition::III);
    let label = store.label(tooth).unwrap();
    assert_eq!(label.to_string(), "Ząb GP 3\nPróchnica\nStopień III");

    let state = store.set_condition(tooth, BasicCondition::Caries);
    assert_eq!(state.basic, None);
    assert_eq!(state.degree, Some(DegreeCondition::III));
    assert_eq!(store.label(tooth).unwrap().lines, vec!["Stopień III"]);
}

#[test]
fn different_basic_condition_replaces_instead_of_toggling() {
    let mut store = ToothConditionStore::default();
    let tooth = key(Quadrant::LowerLeft, 6);

    store.set_condition(tooth, BasicCondition::Filling);
    store.set_condition(tooth, BasicCondition::Crown);
    assert_eq!(store.state(tooth).basic, Some(BasicCondition::Crown));
}

#[test]
fn display_color_follows_active_slots() {
    let config = ChartConfig::default().with_base_color(Rgb::from_hex(0xfafafa));
    let mut store = ToothConditionStore::new(config);
    let tooth = key(Quadrant::UpperLeft, 1);

    assert_eq!(
        store.display_color(tooth),
        DisplayColor::Solid {
            color: Rgb::from_hex(0xfafafa)
        }
    );

    store.set_condition(tooth, DegreeCondition::V);
    assert_eq!(
        store.display_color(tooth),
        DisplayColor::Solid {
            color: DegreeCondition::V.color()
        }
    );

    store.set_condition(tooth, BasicCondition::Filling);
    assert_eq!(
        store.display_color(tooth),
        DisplayColor::Split {
            basic: BasicCondition::Filling.color(),
            degree: DegreeCondition::V.color(),
        }
    );

    store.set_condition(tooth, DegreeCondition::V);
    assert_eq!(
        store.display_color(tooth),
        DisplayColor::Solid {
            color: BasicCondition::Filling.color()
        }
    );
}

#[test]
fn english_labels() {
    let mut store = ToothConditionStore::new(ChartConfig::default().with_locale(Locale::En));
    let tooth = key(Quadrant::UpperRight, 3);
    store.set_condition(tooth, BasicCondition::Caries);
    store.set_condition(tooth, DegreeCondition::III);
    assert_eq!(
        store.label(tooth).unwrap().to_string(),
        "Tooth UR 3\nCaries\nDegree III"
    );
}

#[test]
fn clear_resets_both_slots_and_is_idempotent() {
    let mut store = ToothConditionStore::default();
    let tooth = key(Quadrant::LowerRight, 8);
    store.set_condition(tooth, BasicCondition::Missing);
    store.set_condition(tooth, DegreeCondition::I);

    store.clear(tooth);
    assert_eq!(store.state(tooth), ToothState::UNSET);
    store.clear(tooth);
    assert_eq!(store.state(tooth), ToothState::UNSET);
    assert!(store.is_empty());
}

#[test]
fn clear_all_and_entries() {
    let mut store = ToothConditionStore::default();
    let a = key(Quadrant::LowerLeft, 2);
    let b = key(Quadrant::UpperRight, 7);
    store.set_condition(a, BasicCondition::Calculus);
    store.set_condition(b, DegreeCondition::II);

    let entries: Vec<_> = store.entries().collect();
    assert_eq!(entries.len(), 2);
    // Key order, not insertion order.
    assert_eq!(entries[0].0, b);
    assert_eq!(entries[1].0, a);
    assert_eq!(store.len(), 2);

    store.clear_all();
    assert!(store.is_empty());
    assert_eq!(store.entries().count(), 0);
}

#[test]
fn every_tooth_is_independently_addressable() {
    let mut store = ToothConditionStore::default();
    for (i, tooth) in ToothKey::all().enumerate() {
        let basic = BasicCondition::ALL[i % BasicCondition::ALL.len()];
        store.set_condition(tooth, basic);
    }
    assert_eq!(store.len(), TOOTH_COUNT);
    for (i, tooth) in ToothKey::all().enumerate() {
        let basic = BasicCondition::ALL[i % BasicCondition::ALL.len()];
        assert_eq!(store.state(tooth).basic, Some(basic));
        assert_eq!(store.state(tooth).degree, None);
    }
}

fn tooth_strat() -> impl Strategy<Value = ToothKey> {
    (0..TOOTH_COUNT).prop_map(|i| ToothKey::from_index(i).unwrap())
}

fn condition_strat() -> impl Strategy<Value = Condition> {
    prop::sample::select(Condition::all().collect::<Vec<_>>())
}

fn ops_strat() -> impl Strategy<Value = Vec<(ToothKey, Condition)>> {
    prop::collection::vec((tooth_strat(), condition_strat()), 0..40)
}

fn store_from(ops: &[(ToothKey, Condition)]) -> ToothConditionStore {
    let mut store = ToothConditionStore::default();
    for (tooth, condition) in ops {
        store.set_condition(*tooth, *condition);
    }
    store
}

proptest! {
    #[test]
    fn basic_toggle_twice_clears_basic(
        ops in ops_strat(),
        tooth in tooth_strat(),
        basic in prop::sample::select(BasicCondition::ALL.to_vec()),
    ) {
        let mut store = store_from(&ops);
        // Start from "basic = none" so the first application sets it.
        if let Some(current) = store.state(tooth).basic {
            store.set_condition(tooth, current);
        }
        store.set_condition(tooth, basic);
        store.set_condition(tooth, basic);
        prop_assert_eq!(store.state(tooth).basic, None);
    }

    #[test]
    fn categories_are_independent(
        ops in ops_strat(),
        tooth in tooth_strat(),
        condition in condition_strat(),
    ) {
        let mut store = store_from(&ops);
        let before = store.state(tooth);
        let after = store.set_condition(tooth, condition);
        match condition {
            Condition::Basic(_) => prop_assert_eq!(after.degree, before.degree),
            Condition::Degree(_) => prop_assert_eq!(after.basic, before.basic),
        }
    }

    #[test]
    fn clear_always_unsets(ops in ops_strat(), tooth in tooth_strat()) {
        let mut store = store_from(&ops);
        store.clear(tooth);
        prop_assert!(store.state(tooth).is_unset());
        prop_assert!(store.label(tooth).is_none());
    }

    #[test]
    fn display_color_is_a_function_of_state(ops in ops_strat(), tooth in tooth_strat()) {
        let store = store_from(&ops);
        let first = store.display_color(tooth);
        prop_assert_eq!(first, store.display_color(tooth));

        // Same state reached on a fresh store yields the same color.
        let mut other = ToothConditionStore::default();
        other.insert(tooth, store.state(tooth));
        prop_assert_eq!(first, other.display_color(tooth));
    }

    #[test]
    fn mutating_one_tooth_leaves_the_rest(
        ops in ops_strat(),
        tooth in tooth_strat(),
        condition in condition_strat(),
    ) {
        let mut store = store_from(&ops);
        let before = store.clone();
        store.set_condition(tooth, condition);
        for other in ToothKey::all().filter(|k| *k != tooth) {
            prop_assert_eq!(store.state(other), before.state(other));
        }
    }
}
