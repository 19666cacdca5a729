use crate::error::AtomicDataError;
use crate::loader::{self, ensure_loaded};
use serde_wasm_bindgen::to_value;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

fn to_js_err(err: AtomicDataError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[wasm_bindgen(js_name = atomicMass)]
pub fn atomic_mass(id: i32) -> Result<f64, JsValue> {
    loader::atomic_mass(id).map_err(to_js_err)
}

#[wasm_bindgen(js_name = atomicMassError)]
pub fn atomic_mass_error(id: i32) -> Result<f64, JsValue> {
    loader::atomic_mass_error(id).map_err(to_js_err)
}

#[wasm_bindgen(js_name = naturalAbundance)]
pub fn natural_abundance(id: i32) -> Result<f64, JsValue> {
    loader::natural_abundance(id).map_err(to_js_err)
}

#[wasm_bindgen(js_name = atomicMasses)]
pub fn atomic_masses() -> Result<JsValue, JsValue> {
    let map: BTreeMap<String, f64> = ensure_loaded()
        .masses()
        .iter()
        .map(|(id, mass)| (id.to_string(), *mass))
        .collect();
    to_value(&map).map_err(JsValue::from)
}

#[wasm_bindgen(js_name = naturalAbundances)]
pub fn natural_abundances() -> Result<JsValue, JsValue> {
    let map: BTreeMap<String, f64> = ensure_loaded()
        .abundances()
        .iter()
        .map(|(id, abundance)| (id.to_string(), *abundance))
        .collect();
    to_value(&map).map_err(JsValue::from)
}
