//! Atomic mass, mass uncertainty and natural abundance tables keyed by
//! nuclide id.
//!
//! The bundled dataset is turned into three read-only maps the first time any
//! lookup needs them; see [`ensure_loaded`]. Independent tables can be built
//! from any record list with [`AtomicData::from_records`].
//!
//! ```
//! let h1 = nucdata::atomic_mass(10010).unwrap();
//! assert!((h1 - 1.00782503223).abs() < 1e-12);
//! // synthetic isotopes have a mass but no natural abundance
//! assert!(nucdata::natural_abundance(952421).is_err());
//! ```
pub mod atomic_data;
pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod nuclide_id;
pub mod record;

pub use atomic_data::{
    insert_abundance_entries, insert_mass_entries, AtomicData, DuplicateEntry, ValidationIssue,
};
pub use config::Config;
pub use error::{AtomicDataError, Property};
pub use loader::{atomic_mass, atomic_mass_error, ensure_loaded, natural_abundance, ATOMIC_DATA};
pub use nuclide_id::NuclideId;
pub use record::RawRecord;

// Import PyO3 items conditionally
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;
#[cfg(feature = "pyo3")]
use pyo3::wrap_pyfunction;

#[cfg(feature = "pyo3")]
mod python {
    pub mod data_python;
}

#[cfg(feature = "wasm")]
pub mod wasm {
    pub mod data_wasm;
}

// WASM setup
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "pyo3")]
#[pymodule]
fn nucdata(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    use crate::python::data_python;

    m.add_function(wrap_pyfunction!(data_python::atomic_mass, m)?)?;
    m.add_function(wrap_pyfunction!(data_python::atomic_mass_error, m)?)?;
    m.add_function(wrap_pyfunction!(data_python::natural_abundance, m)?)?;
    m.add_function(wrap_pyfunction!(data_python::atomic_masses, m)?)?;
    m.add_function(wrap_pyfunction!(data_python::natural_abundances, m)?)?;
    Ok(())
}
