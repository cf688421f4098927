//! # luxbridge-adapter-virtual
//!
//! Virtual/demo gateway that simulates a small home in memory.
//!
//! The real gateway speaks CoAP over DTLS and needs provisioned PSK
//! credentials; this adapter implements the same [`GatewayClient`] port
//! against plain in-memory state so the daemon runs end-to-end without
//! hardware and the full stack stays testable.
//!
//! ## Dependency rule
//!
//! Depends on `luxbridge-app` (port traits) and `luxbridge-domain` only.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use luxbridge_app::ports::GatewayClient;
use luxbridge_domain::ambiance::Ambiance;
use luxbridge_domain::device::Device;
use luxbridge_domain::error::{BridgeError, GatewayError, NotFoundError};
use luxbridge_domain::id::{AmbianceId, DeviceId, RoomId};
use luxbridge_domain::room::Room;

#[derive(Default)]
struct GatewayState {
    devices: Vec<Device>,
    rooms: Vec<Room>,
    moods: HashMap<RoomId, Vec<Ambiance>>,
    active: HashMap<RoomId, AmbianceId>,
}

/// In-memory gateway. Cheap to clone; all clones share the same home.
#[derive(Clone, Default)]
pub struct VirtualGateway {
    inner: Arc<Mutex<GatewayState>>,
}

impl VirtualGateway {
    /// Create an empty gateway; populate it with [`add_device`](Self::add_device)
    /// and [`add_room`](Self::add_room).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway pre-populated with a small demo home: two rooms,
    /// a mix of light-capable and plain devices, and Trådfri-style moods.
    #[must_use]
    pub fn seeded() -> Self {
        let gateway = Self::new();

        gateway.add_device(Device::bulb("65537", "Floor Lamp", 126, true));
        gateway.add_device(Device::bulb("65538", "Ceiling Spot", 254, true));
        gateway.add_device(Device::accessory("65539", "Remote Control"));
        gateway.add_device(Device::bulb("65540", "Bedside Lamp", 50, false));
        gateway.add_device(Device::accessory("65541", "Motion Sensor"));

        gateway.add_room(
            Room::new(
                "131073",
                "Living Room",
                vec!["65537".into(), "65538".into(), "65539".into()],
            ),
            vec![
                Ambiance::new("196608", "RELAX"),
                Ambiance::new("196609", "EVERYDAY"),
                Ambiance::new("196610", "FOCUS"),
            ],
            AmbianceId::new("196609"),
        );
        gateway.add_room(
            Room::new("131074", "Bedroom", vec!["65540".into(), "65541".into()]),
            vec![
                Ambiance::new("196611", "RELAX"),
                Ambiance::new("196612", "EVERYDAY"),
            ],
            AmbianceId::new("196611"),
        );

        gateway
    }

    /// Register a device.
    pub fn add_device(&self, device: Device) {
        self.lock().devices.push(device);
    }

    /// Register a room with its mood catalog and active mood.
    pub fn add_room(&self, room: Room, moods: Vec<Ambiance>, active: AmbianceId) {
        let mut state = self.lock();
        state.moods.insert(room.id.clone(), moods);
        state.active.insert(room.id.clone(), active);
        state.rooms.push(room);
    }

    fn lock(&self) -> MutexGuard<'_, GatewayState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GatewayClient for VirtualGateway {
    async fn list_devices(&self) -> Result<Vec<Device>, BridgeError> {
        Ok(self.lock().devices.clone())
    }

    async fn list_groups(&self) -> Result<Vec<Room>, BridgeError> {
        Ok(self.lock().rooms.clone())
    }

    async fn get_group(&self, id: &RoomId) -> Result<Room, BridgeError> {
        self.lock()
            .rooms
            .iter()
            .find(|room| &room.id == id)
            .cloned()
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Room",
                    id: id.to_string(),
                }
                .into()
            })
    }

    async fn list_moods(&self, room: &RoomId) -> Result<Vec<Ambiance>, BridgeError> {
        self.lock()
            .moods
            .get(room)
            .cloned()
            .ok_or_else(|| GatewayError::new(format!("no mood catalog for room {room}")).into())
    }

    async fn active_mood(&self, room: &RoomId) -> Result<Ambiance, BridgeError> {
        let state = self.lock();
        let active = state
            .active
            .get(room)
            .ok_or_else(|| GatewayError::new(format!("no active mood for room {room}")))?;
        state
            .moods
            .get(room)
            .and_then(|moods| moods.iter().find(|mood| &mood.id == active))
            .cloned()
            .ok_or_else(|| {
                GatewayError::new(format!("active mood {active} missing from catalog")).into()
            })
    }

    async fn set_device_power(&self, device: &DeviceId, on: bool) -> Result<(), BridgeError> {
        let mut state = self.lock();
        let device = state
            .devices
            .iter_mut()
            .find(|candidate| &candidate.id == device)
            .ok_or_else(|| NotFoundError {
                entity: "Device",
                id: device.to_string(),
            })?;
        if !device.has_light_control {
            return Err(GatewayError::new(format!("device {} has no light control", device.id)).into());
        }
        device.state = Some(on);
        Ok(())
    }

    async fn set_device_dimmer(&self, device: &DeviceId, value: u8) -> Result<(), BridgeError> {
        let mut state = self.lock();
        let device = state
            .devices
            .iter_mut()
            .find(|candidate| &candidate.id == device)
            .ok_or_else(|| NotFoundError {
                entity: "Device",
                id: device.to_string(),
            })?;
        if !device.has_light_control {
            return Err(GatewayError::new(format!("device {} has no light control", device.id)).into());
        }
        device.dimmer = Some(value);
        Ok(())
    }

    async fn activate_mood(&self, room: &RoomId, mood: &AmbianceId) -> Result<(), BridgeError> {
        let mut state = self.lock();
        if !state.rooms.iter().any(|candidate| &candidate.id == room) {
            return Err(NotFoundError {
                entity: "Room",
                id: room.to_string(),
            }
            .into());
        }
        let known = state
            .moods
            .get(room)
            .is_some_and(|moods| moods.iter().any(|candidate| &candidate.id == mood));
        if !known {
            return Err(NotFoundError {
                entity: "Ambiance",
                id: mood.to_string(),
            }
            .into());
        }
        state.active.insert(room.clone(), mood.clone());
        Ok(())
    }
}
