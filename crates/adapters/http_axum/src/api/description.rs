//! Handler for the JSON description view.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use luxbridge_app::ports::{Clock, GatewayClient};
use luxbridge_domain::description::Description;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the description endpoint.
pub enum GetResponse {
    Ok(Json<Description>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /description.json`
pub async fn get<G, C>(State(state): State<AppState<G, C>>) -> Result<GetResponse, ApiError>
where
    G: GatewayClient + 'static,
    C: Clock + 'static,
{
    let description = state.descriptions.get().await?;
    Ok(GetResponse::Ok(Json(description)))
}
