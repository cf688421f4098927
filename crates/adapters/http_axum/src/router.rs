//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use luxbridge_app::ports::{Clock, GatewayClient};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the wire-contract routes at the root and adds a health endpoint.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a permissive CORS layer
/// so the frontend can be hosted anywhere.
pub fn build<G, C>(state: AppState<G, C>) -> Router
where
    G: GatewayClient + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use luxbridge_app::ports::SystemClock;
    use luxbridge_app::services::command_service::CommandService;
    use luxbridge_app::services::description_service::DescriptionService;
    use luxbridge_domain::ambiance::Ambiance;
    use luxbridge_domain::device::Device;
    use luxbridge_domain::error::{BridgeError, NotFoundError};
    use luxbridge_domain::id::{AmbianceId, DeviceId, RoomId};
    use luxbridge_domain::room::Room;

    #[derive(Clone)]
    struct StubGateway;

    impl GatewayClient for StubGateway {
        async fn list_devices(&self) -> Result<Vec<Device>, BridgeError> {
            Ok(vec![Device::bulb("1", "Lamp", 10, true)])
        }

        async fn list_groups(&self) -> Result<Vec<Room>, BridgeError> {
            Ok(vec![Room::new("r1", "Living Room", vec!["1".into()])])
        }

        async fn get_group(&self, id: &RoomId) -> Result<Room, BridgeError> {
            if id.as_str() == "r1" {
                Ok(Room::new("r1", "Living Room", vec!["1".into()]))
            } else {
                Err(NotFoundError {
                    entity: "Room",
                    id: id.to_string(),
                }
                .into())
            }
        }

        async fn list_moods(&self, _room: &RoomId) -> Result<Vec<Ambiance>, BridgeError> {
            Ok(vec![Ambiance::new("m1", "RELAX")])
        }

        async fn active_mood(&self, _room: &RoomId) -> Result<Ambiance, BridgeError> {
            Ok(Ambiance::new("m1", "RELAX"))
        }

        async fn set_device_power(&self, device: &DeviceId, _on: bool) -> Result<(), BridgeError> {
            if device.as_str() == "1" {
                Ok(())
            } else {
                Err(NotFoundError {
                    entity: "Device",
                    id: device.to_string(),
                }
                .into())
            }
        }

        async fn set_device_dimmer(
            &self,
            device: &DeviceId,
            _value: u8,
        ) -> Result<(), BridgeError> {
            if device.as_str() == "1" {
                Ok(())
            } else {
                Err(NotFoundError {
                    entity: "Device",
                    id: device.to_string(),
                }
                .into())
            }
        }

        async fn activate_mood(
            &self,
            _room: &RoomId,
            _mood: &AmbianceId,
        ) -> Result<(), BridgeError> {
            Ok(())
        }
    }

    fn test_app() -> Router {
        let descriptions = Arc::new(DescriptionService::new(StubGateway, SystemClock));
        let commands = CommandService::new(StubGateway, Arc::clone(&descriptions));
        build(AppState::new(descriptions, Arc::new(commands)))
    }

    async fn send(app: Router, uri: &str) -> StatusCode {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        assert_eq!(send(test_app(), "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_description_json() {
        assert_eq!(send(test_app(), "/description.json").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_accept_bulb_commands_with_unused_room_segment() {
        assert_eq!(
            send(test_app(), "/bulb/on/anything/1").await,
            StatusCode::OK
        );
        assert_eq!(send(test_app(), "/bulb/off/whatever/1").await, StatusCode::OK);
        assert_eq!(
            send(test_app(), "/bulb/dimmer/r1/1/200").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn should_reject_dimmer_value_above_range() {
        assert_eq!(
            send(test_app(), "/bulb/dimmer/r1/1/300").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_bulb() {
        assert_eq!(
            send(test_app(), "/bulb/on/r1/unknown").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn should_accept_room_commands() {
        assert_eq!(send(test_app(), "/room/on/r1").await, StatusCode::OK);
        assert_eq!(send(test_app(), "/room/off/r1").await, StatusCode::OK);
        assert_eq!(send(test_app(), "/room/dimmer/r1/128").await, StatusCode::OK);
        assert_eq!(send(test_app(), "/room/ambiance/r1/1").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_room() {
        assert_eq!(
            send(test_app(), "/room/on/unknown").await,
            StatusCode::NOT_FOUND
        );
    }
}
