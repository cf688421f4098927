//! Description cache — TTL-bounded view of the gateway with single-flight
//! rebuild.
//!
//! One async mutex guards the cached entry for the whole `get`, including
//! the (network-bound) rebuild. Concurrent callers during a stale window
//! serialize behind a single rebuild and all observe the same value. The
//! lock scope trades read concurrency during refresh for the guarantee that
//! the gateway is never queried twice for the same window; the gateway's own
//! request timeout bounds how long the lock can be held.

use chrono::Duration;
use tokio::sync::Mutex;

use luxbridge_domain::description::Description;
use luxbridge_domain::error::BridgeError;
use luxbridge_domain::time::Timestamp;

use crate::ports::{Clock, GatewayClient};
use crate::services::description_builder::DescriptionBuilder;

/// Maximum age of a cached description before a forced rebuild, in seconds.
pub const DEFAULT_TTL_SECONDS: i64 = 10;

struct CacheEntry {
    value: Description,
    fetched_at: Timestamp,
}

/// Serves the cached description, rebuilding lazily on expiry.
pub struct DescriptionService<G, C> {
    builder: DescriptionBuilder<G>,
    clock: C,
    ttl: Duration,
    // `None` encodes "no value, no fetch time" as one state; the entry is
    // absent at startup and after every invalidation.
    cache: Mutex<Option<CacheEntry>>,
}

impl<G: GatewayClient, C: Clock> DescriptionService<G, C> {
    /// Create a cache with the default 10 second TTL.
    pub fn new(gateway: G, clock: C) -> Self {
        Self::with_ttl(gateway, clock, Duration::seconds(DEFAULT_TTL_SECONDS))
    }

    /// Create a cache with an explicit TTL.
    pub fn with_ttl(gateway: G, clock: C, ttl: Duration) -> Self {
        Self {
            builder: DescriptionBuilder::new(gateway),
            clock,
            ttl,
            cache: Mutex::new(None),
        }
    }

    /// Return the current description, rebuilding it first when the entry
    /// is absent or older than the TTL.
    ///
    /// # Errors
    ///
    /// Propagates [`BridgeError`] from a failed rebuild. The previous entry
    /// is left untouched in that case — a stale value is never served as a
    /// successful response.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self) -> Result<Description, BridgeError> {
        let mut entry = self.cache.lock().await;

        if let Some(cached) = entry.as_ref() {
            if self.clock.now() - cached.fetched_at <= self.ttl {
                tracing::trace!("description cache hit");
                return Ok(cached.value.clone());
            }
        }

        let value = self.builder.build().await?;
        *entry = Some(CacheEntry {
            value: value.clone(),
            fetched_at: self.clock.now(),
        });
        tracing::debug!("description cache refreshed");
        Ok(value)
    }

    /// Drop the cached entry; the next [`get`](Self::get) rebuilds.
    ///
    /// Idempotent. Takes the same lock as `get`, so an invalidation can
    /// never be overwritten by a rebuild that started before it.
    pub async fn invalidate(&self) {
        *self.cache.lock().await = None;
        tracing::debug!("description cache invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex as StdMutex};

    use luxbridge_domain::ambiance::Ambiance;
    use luxbridge_domain::device::Device;
    use luxbridge_domain::error::GatewayError;
    use luxbridge_domain::id::{AmbianceId, DeviceId, RoomId};
    use luxbridge_domain::room::Room;

    /// Gateway that counts device listings and can be told to fail.
    #[derive(Clone, Default)]
    struct CountingGateway {
        fetches: Arc<AtomicUsize>,
        failing: Arc<AtomicBool>,
    }

    impl GatewayClient for CountingGateway {
        async fn list_devices(&self) -> Result<Vec<Device>, BridgeError> {
            // Suspend once so concurrent callers genuinely interleave.
            tokio::task::yield_now().await;
            if self.failing.load(Ordering::SeqCst) {
                return Err(GatewayError::new("gateway unreachable").into());
            }
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Device::bulb("1", "Lamp", 10, true)])
        }

        async fn list_groups(&self) -> Result<Vec<Room>, BridgeError> {
            Ok(vec![Room::new("r1", "Living Room", vec!["1".into()])])
        }

        async fn get_group(&self, id: &RoomId) -> Result<Room, BridgeError> {
            Ok(Room::new(id.clone(), "Living Room", vec!["1".into()]))
        }

        async fn list_moods(&self, _room: &RoomId) -> Result<Vec<Ambiance>, BridgeError> {
            Ok(vec![Ambiance::new("m1", "RELAX")])
        }

        async fn active_mood(&self, _room: &RoomId) -> Result<Ambiance, BridgeError> {
            Ok(Ambiance::new("m1", "RELAX"))
        }

        async fn set_device_power(&self, _device: &DeviceId, _on: bool) -> Result<(), BridgeError> {
            Ok(())
        }

        async fn set_device_dimmer(
            &self,
            _device: &DeviceId,
            _value: u8,
        ) -> Result<(), BridgeError> {
            Ok(())
        }

        async fn activate_mood(
            &self,
            _room: &RoomId,
            _mood: &AmbianceId,
        ) -> Result<(), BridgeError> {
            Ok(())
        }
    }

    /// Clock that only moves when the test says so.
    #[derive(Clone)]
    struct ManualClock {
        now: Arc<StdMutex<Timestamp>>,
    }

    impl ManualClock {
        fn start() -> Self {
            Self {
                now: Arc::new(StdMutex::new(luxbridge_domain::time::now())),
            }
        }

        fn advance_seconds(&self, seconds: i64) {
            *self.now.lock().unwrap() += Duration::seconds(seconds);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Timestamp {
            *self.now.lock().unwrap()
        }
    }

    fn service(
        gateway: &CountingGateway,
        clock: &ManualClock,
    ) -> DescriptionService<CountingGateway, ManualClock> {
        DescriptionService::new(gateway.clone(), clock.clone())
    }

    #[tokio::test]
    async fn should_fetch_once_for_repeated_gets_within_ttl() {
        let gateway = CountingGateway::default();
        let clock = ManualClock::start();
        let svc = service(&gateway, &clock);

        svc.get().await.unwrap();
        clock.advance_seconds(3);
        svc.get().await.unwrap();
        clock.advance_seconds(3);
        svc.get().await.unwrap();

        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_not_rebuild_at_exactly_ttl_age() {
        let gateway = CountingGateway::default();
        let clock = ManualClock::start();
        let svc = service(&gateway, &clock);

        svc.get().await.unwrap();
        clock.advance_seconds(DEFAULT_TTL_SECONDS);
        svc.get().await.unwrap();

        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_rebuild_exactly_once_after_ttl_expires() {
        let gateway = CountingGateway::default();
        let clock = ManualClock::start();
        let svc = service(&gateway, &clock);

        svc.get().await.unwrap();
        clock.advance_seconds(DEFAULT_TTL_SECONDS + 1);
        svc.get().await.unwrap();
        svc.get().await.unwrap();

        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn should_share_one_rebuild_between_concurrent_gets() {
        let gateway = CountingGateway::default();
        let clock = ManualClock::start();
        let svc = service(&gateway, &clock);

        let (a, b, c) = tokio::join!(svc.get(), svc.get(), svc.get());
        let (a, b, c) = (a.unwrap(), b.unwrap(), c.unwrap());

        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[tokio::test]
    async fn should_rebuild_after_invalidation_even_within_ttl() {
        let gateway = CountingGateway::default();
        let clock = ManualClock::start();
        let svc = service(&gateway, &clock);

        svc.get().await.unwrap();
        svc.invalidate().await;
        svc.get().await.unwrap();

        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn should_be_idempotent_when_invalidating_repeatedly() {
        let gateway = CountingGateway::default();
        let clock = ManualClock::start();
        let svc = service(&gateway, &clock);

        svc.invalidate().await;
        svc.invalidate().await;
        svc.get().await.unwrap();

        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_propagate_rebuild_failure_and_recover_afterwards() {
        let gateway = CountingGateway::default();
        let clock = ManualClock::start();
        let svc = service(&gateway, &clock);

        svc.get().await.unwrap();
        clock.advance_seconds(DEFAULT_TTL_SECONDS + 1);

        gateway.failing.store(true, Ordering::SeqCst);
        let result = svc.get().await;
        assert!(matches!(result, Err(BridgeError::Gateway(_))));

        gateway.failing.store(false, Ordering::SeqCst);
        let description = svc.get().await.unwrap();
        assert_eq!(description.rooms.len(), 1);
        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 2);
    }
}
