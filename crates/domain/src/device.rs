//! Device — anything the gateway reports: bulbs, remotes, repeaters.
//!
//! Devices are created and refreshed exclusively from gateway data. They are
//! never mutated locally; state changes go through gateway commands, which
//! invalidate the cached view instead of patching it.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

/// A gateway-reported device.
///
/// `dimmer` and `state` are only present on light-capable devices; remotes
/// and other accessories report neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub has_light_control: bool,
    pub dimmer: Option<u8>,
    pub state: Option<bool>,
}

impl Device {
    /// Construct a light-capable device.
    #[must_use]
    pub fn bulb(id: impl Into<DeviceId>, name: impl Into<String>, dimmer: u8, on: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            has_light_control: true,
            dimmer: Some(dimmer),
            state: Some(on),
        }
    }

    /// Construct a device without light control (remote, sensor, repeater).
    #[must_use]
    pub fn accessory(id: impl Into<DeviceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            has_light_control: false,
            dimmer: None,
            state: None,
        }
    }
}
