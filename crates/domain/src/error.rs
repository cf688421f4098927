//! Common error types used across the workspace.
//!
//! Each failure class gets its own typed error; [`BridgeError`] aggregates
//! them with `#[from]` conversions so every layer can bubble errors with `?`
//! without stringly-typed variants.

use crate::id::DeviceId;

/// Top-level error for all core operations.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Transport or protocol failure talking to the gateway. Transient,
    /// never retried here — the caller decides.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A device, room, or ambiance could not be resolved.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// One or more members failed during a room-level fan-out.
    #[error(transparent)]
    PartialFanout(#[from] PartialFanoutError),
}

/// Failure from the gateway transport.
#[derive(Debug, thiserror::Error)]
#[error("gateway request failed: {message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A lookup by id came back empty.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Human-readable entity kind, e.g. `"Device"` or `"Room"`.
    pub entity: &'static str,
    pub id: String,
}

/// A room-level fan-out completed, but some member commands failed.
///
/// The surviving members were still commanded and the cache was still
/// invalidated — this error reports what could not be reached instead of
/// silently discarding it.
#[derive(Debug, thiserror::Error)]
#[error("{}/{attempted} member commands failed during fan-out", failures.len())]
pub struct PartialFanoutError {
    /// Number of member commands issued.
    pub attempted: usize,
    /// The members that failed, with the underlying reason.
    pub failures: Vec<MemberFailure>,
}

/// A single failed member command inside a fan-out.
#[derive(Debug)]
pub struct MemberFailure {
    pub device_id: DeviceId,
    pub reason: String,
}
