//! Ambiance — a named lighting preset (gateway "mood"), read-only here.

use serde::{Deserialize, Serialize};

use crate::id::AmbianceId;

/// A per-room lighting preset. Immutable from this system's perspective;
/// the gateway owns the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ambiance {
    pub id: AmbianceId,
    pub name: String,
}

impl Ambiance {
    #[must_use]
    pub fn new(id: impl Into<AmbianceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
