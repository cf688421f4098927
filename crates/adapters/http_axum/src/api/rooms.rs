//! Handlers for room-level commands.

use axum::extract::{Path, State};

use luxbridge_app::ports::{Clock, GatewayClient};
use luxbridge_domain::id::{AmbianceId, RoomId};

use crate::api::CommandResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /room/on/{room}`
pub async fn turn_on<G, C>(
    State(state): State<AppState<G, C>>,
    Path(room): Path<String>,
) -> Result<CommandResponse, ApiError>
where
    G: GatewayClient + 'static,
    C: Clock + 'static,
{
    state
        .commands
        .set_room_power(&RoomId::new(room), true)
        .await?;
    Ok(CommandResponse::Done)
}

/// `GET /room/off/{room}`
pub async fn turn_off<G, C>(
    State(state): State<AppState<G, C>>,
    Path(room): Path<String>,
) -> Result<CommandResponse, ApiError>
where
    G: GatewayClient + 'static,
    C: Clock + 'static,
{
    state
        .commands
        .set_room_power(&RoomId::new(room), false)
        .await?;
    Ok(CommandResponse::Done)
}

/// `GET /room/dimmer/{room}/{value}`
pub async fn set_dimmer<G, C>(
    State(state): State<AppState<G, C>>,
    Path((room, value)): Path<(String, u8)>,
) -> Result<CommandResponse, ApiError>
where
    G: GatewayClient + 'static,
    C: Clock + 'static,
{
    state
        .commands
        .set_room_dimmer(&RoomId::new(room), value)
        .await?;
    Ok(CommandResponse::Done)
}

/// `GET /room/ambiance/{room}/{value}`
///
/// Mood ids are numeric on the wire; the gateway treats them as opaque
/// identifiers, so the integer is parroted back as a string id.
pub async fn set_ambiance<G, C>(
    State(state): State<AppState<G, C>>,
    Path((room, value)): Path<(String, u32)>,
) -> Result<CommandResponse, ApiError>
where
    G: GatewayClient + 'static,
    C: Clock + 'static,
{
    state
        .commands
        .set_room_ambiance(&RoomId::new(room), &AmbianceId::new(value.to_string()))
        .await?;
    Ok(CommandResponse::Done)
}
