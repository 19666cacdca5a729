use crate::nuclide_id::NuclideId;
use serde::Serialize;
use std::fmt;

/// The three scalar properties stored per nuclide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Property {
    Mass,
    MassError,
    Abundance,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::Mass => "atomic mass",
            Property::MassError => "atomic mass error",
            Property::Abundance => "natural abundance",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by lookups and by loading record tables from JSON.
#[derive(Debug, thiserror::Error)]
pub enum AtomicDataError {
    /// The nuclide has no entry in the requested table. Never defaulted to zero.
    #[error("no {property} data for nuclide {id}")]
    NotFound { property: Property, id: NuclideId },

    #[error("invalid record table: {0}")]
    Json(#[from] serde_json::Error),
}

impl AtomicDataError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AtomicDataError::NotFound { .. })
    }
}
