use crate::nuclide_id::NuclideId;
use serde::{Deserialize, Serialize};

/// One row of a raw reference-data table.
///
/// A row may carry any subset of the three properties: a mass table supplies
/// `mass` and `mass_error`, an abundance table supplies `abundance`, and both
/// may describe the same nuclide. Missing fields mean "this source says
/// nothing", not zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: NuclideId,
    #[serde(default)]
    pub mass: Option<f64>,
    #[serde(default)]
    pub mass_error: Option<f64>,
    #[serde(default)]
    pub abundance: Option<f64>,
}

impl RawRecord {
    /// Row from a mass evaluation: atomic mass and its uncertainty in u.
    pub const fn mass(id: i32, mass: f64, mass_error: f64) -> Self {
        RawRecord {
            id: NuclideId(id),
            mass: Some(mass),
            mass_error: Some(mass_error),
            abundance: None,
        }
    }

    /// Row from an isotopic composition table.
    pub const fn abundance(id: i32, abundance: f64) -> Self {
        RawRecord {
            id: NuclideId(id),
            mass: None,
            mass_error: None,
            abundance: Some(abundance),
        }
    }

    /// Row carrying all three properties.
    pub const fn full(id: i32, mass: f64, mass_error: f64, abundance: f64) -> Self {
        RawRecord {
            id: NuclideId(id),
            mass: Some(mass),
            mass_error: Some(mass_error),
            abundance: Some(abundance),
        }
    }
}
