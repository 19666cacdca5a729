use crate::error::AtomicDataError;
use crate::loader::{self, ensure_loaded};
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn to_py_err(err: AtomicDataError) -> PyErr {
    if err.is_not_found() {
        PyKeyError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}

/// Atomic mass in u; raises KeyError for an unknown nuclide id.
#[pyfunction]
pub fn atomic_mass(id: i32) -> PyResult<f64> {
    loader::atomic_mass(id).map_err(to_py_err)
}

#[pyfunction]
pub fn atomic_mass_error(id: i32) -> PyResult<f64> {
    loader::atomic_mass_error(id).map_err(to_py_err)
}

/// Natural abundance; raises KeyError for an id with no abundance data.
#[pyfunction]
pub fn natural_abundance(id: i32) -> PyResult<f64> {
    loader::natural_abundance(id).map_err(to_py_err)
}

#[pyfunction]
pub fn atomic_masses(py: Python) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    for (id, mass) in ensure_loaded().masses() {
        dict.set_item(id.value(), *mass)?;
    }
    Ok(dict.into())
}

#[pyfunction]
pub fn natural_abundances(py: Python) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    for (id, abundance) in ensure_loaded().abundances() {
        dict.set_item(id.value(), *abundance)?;
    }
    Ok(dict.into())
}
