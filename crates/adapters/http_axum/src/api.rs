//! Wire-contract handler modules.
//!
//! All mutation endpoints are GETs with an empty 200 body, matching what
//! the existing web frontend expects. The `{room}` segment in the bulb
//! routes is part of that contract but carries no meaning for the core —
//! it is accepted and ignored.

pub mod bulbs;
pub mod description;
pub mod rooms;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use luxbridge_app::ports::{Clock, GatewayClient};

use crate::state::AppState;

/// Empty-bodied 200 returned by every command endpoint.
pub enum CommandResponse {
    Done,
}

impl IntoResponse for CommandResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Done => StatusCode::OK.into_response(),
        }
    }
}

/// Build the wire-contract sub-router.
pub fn routes<G, C>() -> Router<AppState<G, C>>
where
    G: GatewayClient + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/description.json", get(description::get::<G, C>))
        // Bulbs
        .route("/bulb/on/{room}/{bulb}", get(bulbs::turn_on::<G, C>))
        .route("/bulb/off/{room}/{bulb}", get(bulbs::turn_off::<G, C>))
        .route(
            "/bulb/dimmer/{room}/{bulb}/{value}",
            get(bulbs::set_dimmer::<G, C>),
        )
        // Rooms
        .route("/room/on/{room}", get(rooms::turn_on::<G, C>))
        .route("/room/off/{room}", get(rooms::turn_off::<G, C>))
        .route("/room/dimmer/{room}/{value}", get(rooms::set_dimmer::<G, C>))
        .route(
            "/room/ambiance/{room}/{value}",
            get(rooms::set_ambiance::<G, C>),
        )
}
