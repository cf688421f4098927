//! Handlers for single-bulb commands.
//!
//! The `room` path segment is accepted for wire compatibility but never
//! validated against the bulb's actual room.

use axum::extract::{Path, State};

use luxbridge_app::ports::{Clock, GatewayClient};
use luxbridge_domain::id::DeviceId;

use crate::api::CommandResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /bulb/on/{room}/{bulb}`
pub async fn turn_on<G, C>(
    State(state): State<AppState<G, C>>,
    Path((_room, bulb)): Path<(String, String)>,
) -> Result<CommandResponse, ApiError>
where
    G: GatewayClient + 'static,
    C: Clock + 'static,
{
    state
        .commands
        .set_bulb_power(&DeviceId::new(bulb), true)
        .await?;
    Ok(CommandResponse::Done)
}

/// `GET /bulb/off/{room}/{bulb}`
pub async fn turn_off<G, C>(
    State(state): State<AppState<G, C>>,
    Path((_room, bulb)): Path<(String, String)>,
) -> Result<CommandResponse, ApiError>
where
    G: GatewayClient + 'static,
    C: Clock + 'static,
{
    state
        .commands
        .set_bulb_power(&DeviceId::new(bulb), false)
        .await?;
    Ok(CommandResponse::Done)
}

/// `GET /bulb/dimmer/{room}/{bulb}/{value}`
///
/// `value` is extracted as `u8`, so anything outside 0–255 is rejected
/// before it reaches the dispatcher.
pub async fn set_dimmer<G, C>(
    State(state): State<AppState<G, C>>,
    Path((_room, bulb, value)): Path<(String, String, u8)>,
) -> Result<CommandResponse, ApiError>
where
    G: GatewayClient + 'static,
    C: Clock + 'static,
{
    state
        .commands
        .set_bulb_dimmer(&DeviceId::new(bulb), value)
        .await?;
    Ok(CommandResponse::Done)
}
