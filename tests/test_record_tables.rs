// Integration tests for building tables from caller-supplied record lists

use nucdata::{insert_abundance_entries, insert_mass_entries, AtomicData, NuclideId, RawRecord};
use std::collections::BTreeMap;

#[test]
fn test_hydrogen_scenario() {
    let records = [
        RawRecord::full(10010, 1.0078250319, 0.0, 0.999885),
        RawRecord::full(10020, 2.0141017780, 0.0, 0.000115),
    ];
    let data = AtomicData::from_records(&records);
    assert_eq!(data.mass_of(10010).unwrap(), 1.0078250319);
    let sum = data.abundance_of(10010).unwrap() + data.abundance_of(10020).unwrap();
    assert!((sum - 1.0).abs() < 1e-12, "got {}", sum);
    assert!(data.mass_of(10030).unwrap_err().is_not_found());
}

#[test]
fn test_americium_isomer_scenario() {
    let data = AtomicData::from_records(&[RawRecord::mass(952421, 242.058839, 0.0)]);
    assert_eq!(data.mass_of(952421).unwrap(), 242.058839);
    assert!(data.abundance_of(952421).unwrap_err().is_not_found());
}

#[test]
fn test_passes_are_independent_folds() {
    let records = vec![
        RawRecord::mass(30060, 6.015, 1e-3),
        RawRecord::abundance(30060, 0.0759),
        RawRecord::mass(30060, 6.0151228874, 1.55e-9),
        RawRecord::abundance(30060, 0.07589),
    ];

    let mut masses = BTreeMap::new();
    let mut errors = BTreeMap::new();
    insert_mass_entries(&records, &mut masses, &mut errors);
    assert_eq!(masses.get(&NuclideId(30060)), Some(&6.0151228874));
    assert_eq!(errors.get(&NuclideId(30060)), Some(&1.55e-9));

    let mut abundances = BTreeMap::new();
    insert_abundance_entries(&records, &mut abundances);
    assert_eq!(abundances.get(&NuclideId(30060)), Some(&0.07589));
    assert_eq!(abundances.len(), 1);
}

#[test]
fn test_inserting_into_populated_maps_overwrites() {
    let mut masses = BTreeMap::from([(NuclideId(10010), 1.0)]);
    let mut errors = BTreeMap::new();
    insert_mass_entries(
        &[RawRecord::mass(10010, 1.00782503223, 9e-11)],
        &mut masses,
        &mut errors,
    );
    assert_eq!(masses[&NuclideId(10010)], 1.00782503223);
}

#[test]
fn test_record_order_decides_conflicts() {
    let early = RawRecord::mass(260560, 55.9349375, 7e-7);
    let late = RawRecord::mass(260560, 55.93493633, 4.9e-7);
    assert_eq!(AtomicData::from_records(&[early, late]).mass_of(260560).unwrap(), 55.93493633);
    assert_eq!(AtomicData::from_records(&[late, early]).mass_of(260560).unwrap(), 55.9349375);
}

#[test]
fn test_json_records_match_literal_records() {
    let json = r#"[
        {"id": 10010, "mass": 1.0078250319, "mass_error": 0.0, "abundance": 0.999885},
        {"id": 10020, "mass": 2.0141017780, "mass_error": 0.0, "abundance": 0.000115}
    ]"#;
    let from_json = AtomicData::from_json_records(json).unwrap();
    let from_literal = AtomicData::from_records(&[
        RawRecord::full(10010, 1.0078250319, 0.0, 0.999885),
        RawRecord::full(10020, 2.0141017780, 0.0, 0.000115),
    ]);
    assert_eq!(from_json, from_literal);
}

#[test]
fn test_empty_table_gives_empty_maps() {
    let records: Vec<RawRecord> = Vec::new();
    let data = AtomicData::from_records(&records);
    assert!(data.is_empty());
    assert_eq!(data.len(), 0);
    assert!(data.mass_of(10010).unwrap_err().is_not_found());
}
