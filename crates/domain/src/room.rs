//! Room — a gateway group of devices sharing ambiance presets.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, RoomId};

/// A gateway group.
///
/// `member_ids` may reference devices absent from the device listing; such
/// members are skipped when the view is built, never treated as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub member_ids: Vec<DeviceId>,
}

impl Room {
    #[must_use]
    pub fn new(
        id: impl Into<RoomId>,
        name: impl Into<String>,
        member_ids: Vec<DeviceId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            member_ids,
        }
    }
}
