use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque integer key identifying a nuclide (isotope or isomeric state).
///
/// The value is produced by an external naming scheme and is never decoded
/// here. Two ids are equal iff their integer values are equal. The bundled
/// dataset uses the zzaaam convention (`Z*10000 + A*10 + m`), so hydrogen-1 is
/// `10010` and Am242m is `952421`, but nothing in the lookup tables depends on
/// that layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NuclideId(pub i32);

impl NuclideId {
    /// Raw integer value of the id.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for NuclideId {
    fn from(id: i32) -> Self {
        NuclideId(id)
    }
}

impl From<NuclideId> for i32 {
    fn from(id: NuclideId) -> Self {
        id.0
    }
}

impl fmt::Display for NuclideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
