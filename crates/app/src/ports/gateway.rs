//! Gateway port — queries and commands against the lighting gateway.
//!
//! The wire protocol (CoAP/DTLS, PSK provisioning) lives behind this trait.
//! Calls are blocking from the core's point of view and are assumed to carry
//! their own bounded timeout; a timeout surfaces as a gateway error. The
//! core never retries.

use std::future::Future;

use luxbridge_domain::ambiance::Ambiance;
use luxbridge_domain::device::Device;
use luxbridge_domain::error::BridgeError;
use luxbridge_domain::id::{AmbianceId, DeviceId, RoomId};
use luxbridge_domain::room::Room;

/// Client capability required by the core.
///
/// Implementations live in adapter crates; the in-memory
/// `luxbridge-adapter-virtual` gateway is the reference implementation.
pub trait GatewayClient: Send + Sync {
    /// List every device known to the gateway.
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, BridgeError>> + Send;

    /// List every group (room).
    fn list_groups(&self) -> impl Future<Output = Result<Vec<Room>, BridgeError>> + Send;

    /// Fetch a single group by id.
    fn get_group(&self, id: &RoomId) -> impl Future<Output = Result<Room, BridgeError>> + Send;

    /// List the mood catalog of a room.
    fn list_moods(
        &self,
        room: &RoomId,
    ) -> impl Future<Output = Result<Vec<Ambiance>, BridgeError>> + Send;

    /// Fetch the currently active mood of a room.
    fn active_mood(
        &self,
        room: &RoomId,
    ) -> impl Future<Output = Result<Ambiance, BridgeError>> + Send;

    /// Switch a device on or off.
    fn set_device_power(
        &self,
        device: &DeviceId,
        on: bool,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;

    /// Set a device's dimmer level (0–255).
    fn set_device_dimmer(
        &self,
        device: &DeviceId,
        value: u8,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;

    /// Activate a mood on a whole room (single group-level command).
    fn activate_mood(
        &self,
        room: &RoomId,
        mood: &AmbianceId,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;
}
