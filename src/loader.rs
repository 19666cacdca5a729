// Process-wide tables built from the bundled dataset on first use
use crate::atomic_data::AtomicData;
use crate::config::{Config, CONFIG};
use crate::data::{ATOMIC_MASS_RECORDS, NATURAL_ABUNDANCE_RECORDS};
use crate::error::AtomicDataError;
use crate::nuclide_id::NuclideId;
use crate::record::RawRecord;
use once_cell::sync::Lazy;
use std::sync::TryLockError;

/// The bundled tables. Built exactly once by whichever thread touches it
/// first; every other caller either blocks until that build finishes or, after
/// it, reads through an atomic check with no locking.
pub static ATOMIC_DATA: Lazy<AtomicData> = Lazy::new(load_bundled);

fn bundled_records() -> impl Iterator<Item = &'static RawRecord> + Clone {
    ATOMIC_MASS_RECORDS.iter().chain(NATURAL_ABUNDANCE_RECORDS)
}

/// Settings for the first load. Never blocks: a caller that still holds the
/// [`Config::global`] guard while triggering the load gets the defaults.
fn load_config() -> Config {
    match CONFIG.try_lock() {
        Ok(config) => config.clone(),
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().clone(),
        Err(TryLockError::WouldBlock) => {
            log::warn!("config is locked during the first atomic data load; using defaults");
            Config::new()
        }
    }
}

/// Messages the loader reports for a freshly built table under `config`:
/// one per overriding record when `warn_on_duplicates` is set, then one per
/// validation issue when `validate_on_load` is set.
pub fn load_warnings<'a, I>(records: I, data: &AtomicData, config: &Config) -> Vec<String>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut warnings = Vec::new();
    if config.warn_on_duplicates {
        for duplicate in AtomicData::duplicates(records) {
            warnings.push(format!(
                "duplicate {} row for nuclide {} at record {}; the later row wins",
                duplicate.property, duplicate.id, duplicate.index
            ));
        }
    }
    if config.validate_on_load {
        for issue in data.validate() {
            warnings.push(format!("atomic data: {}", issue));
        }
    }
    warnings
}

fn load_bundled() -> AtomicData {
    let config = load_config();
    let data = AtomicData::from_records(bundled_records());
    log::debug!(
        "loaded atomic data: {} masses, {} mass errors, {} abundances",
        data.masses().len(),
        data.mass_errors().len(),
        data.abundances().len()
    );
    for warning in load_warnings(bundled_records(), &data, &config) {
        log::warn!("{}", warning);
    }
    data
}

/// Make sure the bundled tables are built and return them.
///
/// Safe to call any number of times from any thread; only the first call does
/// work.
pub fn ensure_loaded() -> &'static AtomicData {
    &ATOMIC_DATA
}

/// Atomic mass in u from the bundled tables.
pub fn atomic_mass(id: impl Into<NuclideId>) -> Result<f64, AtomicDataError> {
    ensure_loaded().mass_of(id)
}

/// Uncertainty on the atomic mass in u from the bundled tables.
pub fn atomic_mass_error(id: impl Into<NuclideId>) -> Result<f64, AtomicDataError> {
    ensure_loaded().mass_error_of(id)
}

/// Natural abundance (atom fraction) from the bundled tables.
pub fn natural_abundance(id: impl Into<NuclideId>) -> Result<f64, AtomicDataError> {
    ensure_loaded().abundance_of(id)
}
