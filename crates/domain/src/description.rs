//! Description — the JSON view served to HTTP clients.
//!
//! The description is rebuilt from scratch on every cache refresh; it is
//! never patched incrementally. Field order in the room view matches the
//! wire contract consumed by the web frontend.

use serde::{Deserialize, Serialize};

use crate::ambiance::Ambiance;
use crate::device::Device;
use crate::id::{AmbianceId, DeviceId, RoomId};

/// The full view: rooms in gateway listing order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description {
    pub rooms: Vec<RoomView>,
}

/// One room with its resolved bulbs and ambiance catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomView {
    pub name: String,
    pub bulbs: Vec<BulbView>,
    pub ambiances: Vec<AmbianceView>,
    pub id: RoomId,
    pub ambiance_active: AmbianceId,
}

/// A light-capable device as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulbView {
    pub name: String,
    pub dimmer: u8,
    pub state: bool,
    pub id: DeviceId,
}

impl BulbView {
    /// Project a device into a bulb view, or `None` when the device has no
    /// light control and therefore does not belong in the bulb list.
    #[must_use]
    pub fn from_device(device: &Device) -> Option<Self> {
        if !device.has_light_control {
            return None;
        }
        Some(Self {
            name: device.name.clone(),
            dimmer: device.dimmer.unwrap_or(0),
            state: device.state.unwrap_or(false),
            id: device.id.clone(),
        })
    }
}

/// A catalog entry in a room's ambiance list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbianceView {
    pub name: String,
    pub id: AmbianceId,
}

impl From<&Ambiance> for AmbianceView {
    fn from(ambiance: &Ambiance) -> Self {
        Self {
            name: ambiance.name.clone(),
            id: ambiance.id.clone(),
        }
    }
}
