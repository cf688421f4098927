//! Shared application state for axum handlers.

use std::sync::Arc;

use luxbridge_app::ports::{Clock, GatewayClient};
use luxbridge_app::services::command_service::CommandService;
use luxbridge_app::services::description_service::DescriptionService;

/// Application state shared across all axum handlers.
///
/// Generic over the gateway client and clock to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<G, C> {
    /// Cached description view.
    pub descriptions: Arc<DescriptionService<G, C>>,
    /// Device and room command dispatcher.
    pub commands: Arc<CommandService<G, C>>,
}

impl<G, C> Clone for AppState<G, C> {
    fn clone(&self) -> Self {
        Self {
            descriptions: Arc::clone(&self.descriptions),
            commands: Arc::clone(&self.commands),
        }
    }
}

impl<G, C> AppState<G, C>
where
    G: GatewayClient + 'static,
    C: Clock + 'static,
{
    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// The dispatcher already holds its own `Arc` to the description cache,
    /// so both services arrive pre-shared from the composition root.
    pub fn new(
        descriptions: Arc<DescriptionService<G, C>>,
        commands: Arc<CommandService<G, C>>,
    ) -> Self {
        Self {
            descriptions,
            commands,
        }
    }
}
