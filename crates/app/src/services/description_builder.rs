//! Description builder — aggregates gateway queries into one view tree.
//!
//! The builder owns no state besides the gateway handle; every call produces
//! a fresh [`Description`]. Any failed sub-fetch aborts the whole build — a
//! partial tree is never returned.

use std::collections::HashMap;

use luxbridge_domain::description::{AmbianceView, BulbView, Description, RoomView};
use luxbridge_domain::device::Device;
use luxbridge_domain::error::BridgeError;
use luxbridge_domain::id::DeviceId;
use luxbridge_domain::room::Room;

use crate::ports::GatewayClient;

/// Builds the full description from independent gateway queries.
pub struct DescriptionBuilder<G> {
    gateway: G,
}

impl<G: GatewayClient> DescriptionBuilder<G> {
    /// Create a builder backed by the given gateway client.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Assemble a fresh [`Description`].
    ///
    /// Rooms come back in gateway listing order; bulbs in member-list order.
    /// Member ids that resolve to no known device are dropped silently.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError`] when any underlying gateway query fails; no
    /// partially built room is ever included.
    #[tracing::instrument(skip(self))]
    pub async fn build(&self) -> Result<Description, BridgeError> {
        let devices = self.gateway.list_devices().await?;
        // Index by id; a colliding id wins with its last occurrence, which
        // the gateway should never produce in the first place.
        let index: HashMap<&DeviceId, &Device> =
            devices.iter().map(|device| (&device.id, device)).collect();

        let groups = self.gateway.list_groups().await?;
        let mut rooms = Vec::with_capacity(groups.len());
        for room in &groups {
            rooms.push(self.build_room(room, &index).await?);
        }
        Ok(Description { rooms })
    }

    async fn build_room(
        &self,
        room: &Room,
        index: &HashMap<&DeviceId, &Device>,
    ) -> Result<RoomView, BridgeError> {
        let active = self.gateway.active_mood(&room.id).await?;
        let moods = self.gateway.list_moods(&room.id).await?;

        let bulbs = room
            .member_ids
            .iter()
            .filter_map(|member| index.get(member).copied())
            .filter_map(BulbView::from_device)
            .collect();

        Ok(RoomView {
            name: room.name.clone(),
            bulbs,
            ambiances: moods.iter().map(AmbianceView::from).collect(),
            id: room.id.clone(),
            ambiance_active: active.id,
        })
    }
}
