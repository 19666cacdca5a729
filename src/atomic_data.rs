// Lookup tables for atomic mass, mass uncertainty and natural abundance
use crate::error::{AtomicDataError, Property};
use crate::nuclide_id::NuclideId;
use crate::record::RawRecord;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Immutable snapshot of reference data keyed by [`NuclideId`].
///
/// Three independent maps share one key space but not one key set: a
/// synthetic isotope has a mass and no abundance, and an abundance table may
/// list isotopes a mass evaluation does not. Absence from a map is the only
/// "unknown" signal; no sentinel values are stored.
///
/// Instances are built once from a record table with [`AtomicData::from_records`]
/// and expose no mutation afterwards. The process-wide instance built from the
/// bundled dataset is reached through [`crate::ensure_loaded`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtomicData {
    atomic_mass: BTreeMap<NuclideId, f64>,
    atomic_mass_error: BTreeMap<NuclideId, f64>,
    natural_abundance: BTreeMap<NuclideId, f64>,
}

/// A nuclide id that appears more than once for the same property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateEntry {
    pub id: NuclideId,
    pub property: Property,
    /// Position of the overriding record in table order.
    pub index: usize,
}

/// Data-quality finding reported by the optional validation passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationIssue {
    NonFiniteMass { id: NuclideId, mass: f64 },
    NonPositiveMass { id: NuclideId, mass: f64 },
    InvalidMassError { id: NuclideId, error: f64 },
    AbundanceOutOfRange { id: NuclideId, abundance: f64 },
    AbundanceSumMismatch { element: i32, sum: f64 },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::NonFiniteMass { id, mass } => {
                write!(f, "nuclide {} has non-finite mass {}", id, mass)
            }
            ValidationIssue::NonPositiveMass { id, mass } => {
                write!(f, "nuclide {} has non-positive mass {}", id, mass)
            }
            ValidationIssue::InvalidMassError { id, error } => {
                write!(f, "nuclide {} has invalid mass error {}", id, error)
            }
            ValidationIssue::AbundanceOutOfRange { id, abundance } => {
                write!(f, "nuclide {} has abundance {} outside [0, 1]", id, abundance)
            }
            ValidationIssue::AbundanceSumMismatch { element, sum } => {
                write!(f, "abundances of element group {} sum to {}", element, sum)
            }
        }
    }
}

/// Mass pass: every record carrying a mass sets `id -> mass`, and its
/// uncertainty when one is given. Later records overwrite earlier ones.
///
/// A mass error on a record without a mass is skipped so the error map's
/// keys stay a subset of the mass map's keys.
pub fn insert_mass_entries<'a, I>(
    records: I,
    atomic_mass: &mut BTreeMap<NuclideId, f64>,
    atomic_mass_error: &mut BTreeMap<NuclideId, f64>,
) where
    I: IntoIterator<Item = &'a RawRecord>,
{
    for record in records {
        if let Some(mass) = record.mass {
            atomic_mass.insert(record.id, mass);
            if let Some(error) = record.mass_error {
                atomic_mass_error.insert(record.id, error);
            }
        }
    }
}

/// Abundance pass: every record carrying an abundance sets `id -> abundance`.
/// Later records overwrite earlier ones.
pub fn insert_abundance_entries<'a, I>(records: I, natural_abundance: &mut BTreeMap<NuclideId, f64>)
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    for record in records {
        if let Some(abundance) = record.abundance {
            natural_abundance.insert(record.id, abundance);
        }
    }
}

impl AtomicData {
    /// Build the three maps from a record table in a single deterministic
    /// pass per property.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a RawRecord>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();
        let mut data = AtomicData::default();
        insert_mass_entries(
            records.clone(),
            &mut data.atomic_mass,
            &mut data.atomic_mass_error,
        );
        insert_abundance_entries(records, &mut data.natural_abundance);
        data
    }

    /// Build from a JSON array of records, e.g.
    /// `[{"id": 10010, "mass": 1.00782503223, "abundance": 0.99984426}]`.
    pub fn from_json_records(json: &str) -> Result<Self, AtomicDataError> {
        let records: Vec<RawRecord> = serde_json::from_str(json)?;
        Ok(AtomicData::from_records(&records))
    }

    /// Every record that overrides an earlier one for the same property, in
    /// table order. Merge order is unaffected; this only reports it.
    pub fn duplicates<'a, I>(records: I) -> Vec<DuplicateEntry>
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        let mut seen_mass = HashSet::new();
        let mut seen_abundance = HashSet::new();
        let mut duplicates = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            if record.mass.is_some() && !seen_mass.insert(record.id) {
                duplicates.push(DuplicateEntry {
                    id: record.id,
                    property: Property::Mass,
                    index,
                });
            }
            if record.abundance.is_some() && !seen_abundance.insert(record.id) {
                duplicates.push(DuplicateEntry {
                    id: record.id,
                    property: Property::Abundance,
                    index,
                });
            }
        }
        duplicates
    }

    pub fn mass_of(&self, id: impl Into<NuclideId>) -> Result<f64, AtomicDataError> {
        lookup(&self.atomic_mass, id.into(), Property::Mass)
    }

    pub fn mass_error_of(&self, id: impl Into<NuclideId>) -> Result<f64, AtomicDataError> {
        lookup(&self.atomic_mass_error, id.into(), Property::MassError)
    }

    pub fn abundance_of(&self, id: impl Into<NuclideId>) -> Result<f64, AtomicDataError> {
        lookup(&self.natural_abundance, id.into(), Property::Abundance)
    }

    pub fn contains_mass(&self, id: impl Into<NuclideId>) -> bool {
        self.atomic_mass.contains_key(&id.into())
    }

    pub fn contains_abundance(&self, id: impl Into<NuclideId>) -> bool {
        self.natural_abundance.contains_key(&id.into())
    }

    /// Atomic masses in u, in ascending id order.
    pub fn masses(&self) -> &BTreeMap<NuclideId, f64> {
        &self.atomic_mass
    }

    /// Mass uncertainties in u, in ascending id order.
    pub fn mass_errors(&self) -> &BTreeMap<NuclideId, f64> {
        &self.atomic_mass_error
    }

    /// Natural abundances as atom fractions, in ascending id order.
    pub fn abundances(&self) -> &BTreeMap<NuclideId, f64> {
        &self.natural_abundance
    }

    /// Number of distinct ids with at least one property.
    pub fn len(&self) -> usize {
        let abundance_only = self
            .natural_abundance
            .keys()
            .filter(|id| !self.atomic_mass.contains_key(id))
            .count();
        self.atomic_mass.len() + abundance_only
    }

    pub fn is_empty(&self) -> bool {
        self.atomic_mass.is_empty() && self.natural_abundance.is_empty()
    }

    /// JSON snapshot of the three maps, keyed by the integer id.
    pub fn to_json(&self) -> Result<String, AtomicDataError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Per-entry physical plausibility checks. Reports, never rejects.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for (&id, &mass) in &self.atomic_mass {
            if !mass.is_finite() {
                issues.push(ValidationIssue::NonFiniteMass { id, mass });
            } else if mass <= 0.0 {
                issues.push(ValidationIssue::NonPositiveMass { id, mass });
            }
        }
        for (&id, &error) in &self.atomic_mass_error {
            // also catches NaN
            if !(error >= 0.0) {
                issues.push(ValidationIssue::InvalidMassError { id, error });
            }
        }
        for (&id, &abundance) in &self.natural_abundance {
            if !(0.0..=1.0).contains(&abundance) {
                issues.push(ValidationIssue::AbundanceOutOfRange { id, abundance });
            }
        }
        issues
    }

    /// Check that abundances of each element sum to 1 within `tolerance`.
    ///
    /// The id layout is opaque to this crate, so the caller supplies
    /// `element_of` to group ids by element (for zzaaam ids, `id / 10000`).
    pub fn validate_abundance_sums<F>(&self, element_of: F, tolerance: f64) -> Vec<ValidationIssue>
    where
        F: Fn(NuclideId) -> i32,
    {
        let mut sums: HashMap<i32, f64> = HashMap::new();
        for (&id, &abundance) in &self.natural_abundance {
            *sums.entry(element_of(id)).or_insert(0.0) += abundance;
        }
        let mut issues: Vec<ValidationIssue> = sums
            .into_iter()
            .filter(|(_, sum)| (sum - 1.0).abs() > tolerance)
            .map(|(element, sum)| ValidationIssue::AbundanceSumMismatch { element, sum })
            .collect();
        issues.sort_by_key(|issue| match issue {
            ValidationIssue::AbundanceSumMismatch { element, .. } => *element,
            _ => i32::MIN,
        });
        issues
    }
}

fn lookup(
    map: &BTreeMap<NuclideId, f64>,
    id: NuclideId,
    property: Property,
) -> Result<f64, AtomicDataError> {
    map.get(&id)
        .copied()
        .ok_or(AtomicDataError::NotFound { property, id })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydrogen_records() -> Vec<RawRecord> {
        vec![
            RawRecord::full(10010, 1.0078250319, 0.0, 0.999885),
            RawRecord::full(10020, 2.0141017780, 0.0, 0.000115),
        ]
    }

    #[test]
    fn test_hydrogen_masses_and_abundances() {
        let data = AtomicData::from_records(&hydrogen_records());
        assert_eq!(data.mass_of(10010).unwrap(), 1.0078250319);
        let sum = data.abundance_of(10010).unwrap() + data.abundance_of(10020).unwrap();
        assert!((sum - 1.0).abs() < 1e-12, "H abundances should sum to 1, got {}", sum);
        let err = data.mass_of(10030).unwrap_err();
        assert!(matches!(
            err,
            AtomicDataError::NotFound { property: Property::Mass, id: NuclideId(10030) }
        ));
    }

    #[test]
    fn test_mass_without_abundance() {
        let data = AtomicData::from_records(&[RawRecord::mass(952421, 242.058839, 0.0)]);
        assert_eq!(data.mass_of(952421).unwrap(), 242.058839);
        assert_eq!(data.mass_error_of(952421).unwrap(), 0.0);
        let err = data.abundance_of(952421).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "no natural abundance data for nuclide 952421");
    }

    #[test]
    fn test_abundance_without_mass() {
        let data = AtomicData::from_records(&[RawRecord::abundance(260560, 0.91754)]);
        assert_eq!(data.abundance_of(260560).unwrap(), 0.91754);
        assert!(data.mass_of(260560).unwrap_err().is_not_found());
        assert!(data.mass_error_of(260560).unwrap_err().is_not_found());
    }

    #[test]
    fn test_later_mass_record_wins() {
        let records = [
            RawRecord::mass(30060, 6.015, 1e-3),
            RawRecord::mass(30070, 7.016, 1e-3),
            RawRecord::mass(30060, 6.0151228874, 1.55e-9),
        ];
        let data = AtomicData::from_records(&records);
        assert_eq!(data.mass_of(30060).unwrap(), 6.0151228874);
        assert_eq!(data.mass_error_of(30060).unwrap(), 1.55e-9);
        assert_eq!(data.masses().len(), 2);
    }

    #[test]
    fn test_later_abundance_record_wins() {
        let records = [
            RawRecord::abundance(30060, 0.0759),
            RawRecord::abundance(30060, 0.07589),
        ];
        let data = AtomicData::from_records(&records);
        assert_eq!(data.abundance_of(30060).unwrap(), 0.07589);
    }

    #[test]
    fn test_mass_and_abundance_from_separate_rows_merge() {
        let records = [
            RawRecord::mass(30070, 7.0160034366, 4.5e-9),
            RawRecord::abundance(30070, 0.92411),
        ];
        let data = AtomicData::from_records(&records);
        assert_eq!(data.mass_of(30070).unwrap(), 7.0160034366);
        assert_eq!(data.abundance_of(30070).unwrap(), 0.92411);
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_len_counts_each_id_once() {
        let records = [
            RawRecord::full(10010, 1.00782503223, 9e-11, 0.99984426),
            RawRecord::mass(10030, 3.01604928199, 2.3e-10),
            RawRecord::abundance(501200, 0.3258),
            RawRecord::abundance(501180, 0.2422),
        ];
        let data = AtomicData::from_records(&records);
        assert_eq!(data.len(), 4);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_mass_error_without_mass_is_skipped() {
        let record = RawRecord {
            id: NuclideId(10030),
            mass: None,
            mass_error: Some(2.3e-10),
            abundance: None,
        };
        let data = AtomicData::from_records(&[record]);
        assert!(data.mass_errors().is_empty());
        assert!(data.is_empty());
    }

    #[test]
    fn test_mass_without_error_has_no_error_entry() {
        let record = RawRecord {
            id: NuclideId(10030),
            mass: Some(3.01604928199),
            mass_error: None,
            abundance: None,
        };
        let data = AtomicData::from_records(&[record]);
        assert!(data.contains_mass(10030));
        assert!(data.mass_error_of(10030).unwrap_err().is_not_found());
    }

    #[test]
    fn test_building_twice_gives_identical_maps() {
        let records = hydrogen_records();
        assert_eq!(
            AtomicData::from_records(&records),
            AtomicData::from_records(&records)
        );
    }

    #[test]
    fn test_duplicates_are_reported_in_table_order() {
        let records = [
            RawRecord::full(30060, 6.015, 0.0, 0.0759),
            RawRecord::abundance(30070, 0.9241),
            RawRecord::abundance(30060, 0.07589),
            RawRecord::mass(30060, 6.0151228874, 1.55e-9),
        ];
        let duplicates = AtomicData::duplicates(&records);
        assert_eq!(
            duplicates,
            vec![
                DuplicateEntry { id: NuclideId(30060), property: Property::Abundance, index: 2 },
                DuplicateEntry { id: NuclideId(30060), property: Property::Mass, index: 3 },
            ]
        );
    }

    #[test]
    fn test_validate_flags_non_physical_values() {
        let records = [
            RawRecord::mass(10010, -1.0, 0.0),
            RawRecord::mass(10020, f64::NAN, -1e-6),
            RawRecord::abundance(10010, 1.5),
            RawRecord::full(20040, 4.00260325413, 1.6e-10, 1.0),
        ];
        let issues = AtomicData::from_records(&records).validate();
        assert_eq!(issues.len(), 4);
        assert!(issues.contains(&ValidationIssue::NonPositiveMass { id: NuclideId(10010), mass: -1.0 }));
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, ValidationIssue::NonFiniteMass { id: NuclideId(10020), .. })));
        assert!(issues.contains(&ValidationIssue::InvalidMassError { id: NuclideId(10020), error: -1e-6 }));
        assert!(issues.contains(&ValidationIssue::AbundanceOutOfRange { id: NuclideId(10010), abundance: 1.5 }));
    }

    #[test]
    fn test_validate_abundance_sums_groups_by_caller_key() {
        let records = [
            RawRecord::abundance(30060, 0.07589),
            RawRecord::abundance(30070, 0.92411),
            RawRecord::abundance(50100, 0.1982),
            RawRecord::abundance(50110, 0.7),
        ];
        let data = AtomicData::from_records(&records);
        let issues = data.validate_abundance_sums(|id| id.value() / 10000, 1e-3);
        assert_eq!(issues.len(), 1);
        match issues[0] {
            ValidationIssue::AbundanceSumMismatch { element, sum } => {
                assert_eq!(element, 5);
                assert!((sum - 0.8982).abs() < 1e-9);
            }
            other => panic!("unexpected issue {:?}", other),
        }
    }

    #[test]
    fn test_json_records_round_into_maps() {
        let json = r#"[
            {"id": 10010, "mass": 1.0078250319, "mass_error": 0.0, "abundance": 0.999885},
            {"id": 952421, "mass": 242.058839}
        ]"#;
        let data = AtomicData::from_json_records(json).unwrap();
        assert_eq!(data.mass_of(952421).unwrap(), 242.058839);
        assert!(data.abundance_of(952421).unwrap_err().is_not_found());
        assert_eq!(data.abundance_of(10010).unwrap(), 0.999885);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = AtomicData::from_json_records("[{\"mass\": 1.0}]").unwrap_err();
        assert!(matches!(err, AtomicDataError::Json(_)));
    }

    #[test]
    fn test_to_json_snapshot_uses_integer_keys() {
        let data = AtomicData::from_records(&[RawRecord::mass(952421, 242.058839, 0.0)]);
        let value: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();
        assert_eq!(value["atomic_mass"]["952421"], 242.058839);
        assert!(value["natural_abundance"].as_object().unwrap().is_empty());
    }
}
