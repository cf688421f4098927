//! Command dispatcher — device and room mutations with cache invalidation.
//!
//! Room-level power/dimmer commands fan out to every light-capable member.
//! The fan-out is best-effort: a failing member never aborts the remaining
//! members, and the per-member failures are collected and surfaced as a
//! [`PartialFanoutError`] instead of being swallowed. The cache is
//! invalidated exactly once per dispatcher call, after all members have been
//! attempted. No lock is held here; concurrent mutations race at the
//! gateway, where the last write wins.

use std::collections::HashMap;
use std::sync::Arc;

use luxbridge_domain::device::Device;
use luxbridge_domain::error::{BridgeError, MemberFailure, PartialFanoutError};
use luxbridge_domain::id::{AmbianceId, DeviceId, RoomId};

use crate::ports::{Clock, GatewayClient};
use crate::services::description_service::DescriptionService;

/// What to do with each light-capable member of a room.
#[derive(Debug, Clone, Copy)]
enum MemberCommand {
    Power(bool),
    Dimmer(u8),
}

/// Application service for device- and room-level commands.
pub struct CommandService<G, C> {
    gateway: G,
    descriptions: Arc<DescriptionService<G, C>>,
}

impl<G: GatewayClient, C: Clock> CommandService<G, C> {
    /// Create a dispatcher that invalidates the given description cache
    /// after every mutation.
    pub fn new(gateway: G, descriptions: Arc<DescriptionService<G, C>>) -> Self {
        Self {
            gateway,
            descriptions,
        }
    }

    /// Switch a single bulb on or off.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::NotFound`] when the device cannot be resolved,
    /// or [`BridgeError::Gateway`] when the command fails. The cache is only
    /// invalidated after the mutation went through.
    #[tracing::instrument(skip(self))]
    pub async fn set_bulb_power(&self, device: &DeviceId, on: bool) -> Result<(), BridgeError> {
        self.gateway.set_device_power(device, on).await?;
        self.descriptions.invalidate().await;
        Ok(())
    }

    /// Set a single bulb's dimmer level (0–255).
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::NotFound`] when the device cannot be resolved,
    /// or [`BridgeError::Gateway`] when the command fails.
    #[tracing::instrument(skip(self))]
    pub async fn set_bulb_dimmer(&self, device: &DeviceId, value: u8) -> Result<(), BridgeError> {
        self.gateway.set_device_dimmer(device, value).await?;
        self.descriptions.invalidate().await;
        Ok(())
    }

    /// Switch every light-capable member of a room on or off.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::NotFound`] when the room cannot be resolved,
    /// [`BridgeError::Gateway`] when the member list cannot be fetched, or
    /// [`BridgeError::PartialFanout`] when some member commands failed.
    #[tracing::instrument(skip(self))]
    pub async fn set_room_power(&self, room: &RoomId, on: bool) -> Result<(), BridgeError> {
        self.fan_out(room, MemberCommand::Power(on)).await
    }

    /// Set the dimmer level of every light-capable member of a room.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`set_room_power`](Self::set_room_power).
    #[tracing::instrument(skip(self))]
    pub async fn set_room_dimmer(&self, room: &RoomId, value: u8) -> Result<(), BridgeError> {
        self.fan_out(room, MemberCommand::Dimmer(value)).await
    }

    /// Activate an ambiance on a room — one group-level command, no fan-out.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::NotFound`] when the room cannot be resolved,
    /// or [`BridgeError::Gateway`] when the command fails.
    #[tracing::instrument(skip(self))]
    pub async fn set_room_ambiance(
        &self,
        room: &RoomId,
        ambiance: &AmbianceId,
    ) -> Result<(), BridgeError> {
        self.gateway.activate_mood(room, ambiance).await?;
        self.descriptions.invalidate().await;
        Ok(())
    }

    /// Run one command against every light-capable member of a room.
    ///
    /// Unknown member ids and members without light control are skipped.
    /// Failures are collected; the loop keeps going. Invalidation happens
    /// once, after the last member, even when zero commands were issued.
    async fn fan_out(&self, room: &RoomId, command: MemberCommand) -> Result<(), BridgeError> {
        let group = self.gateway.get_group(room).await?;
        let devices = self.gateway.list_devices().await?;
        let index: HashMap<&DeviceId, &Device> =
            devices.iter().map(|device| (&device.id, device)).collect();

        let mut attempted = 0usize;
        let mut failures = Vec::new();
        for member in &group.member_ids {
            let Some(device) = index.get(member).copied() else {
                continue;
            };
            if !device.has_light_control {
                continue;
            }
            attempted += 1;
            let result = match command {
                MemberCommand::Power(on) => self.gateway.set_device_power(&device.id, on).await,
                MemberCommand::Dimmer(value) => {
                    self.gateway.set_device_dimmer(&device.id, value).await
                }
            };
            if let Err(err) = result {
                tracing::warn!(device = %device.id, error = %err, "member command failed, continuing fan-out");
                failures.push(MemberFailure {
                    device_id: device.id.clone(),
                    reason: err.to_string(),
                });
            }
        }

        self.descriptions.invalidate().await;

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PartialFanoutError {
                attempted,
                failures,
            }
            .into())
        }
    }
}
