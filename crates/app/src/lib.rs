//! # luxbridge-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `GatewayClient` — device/group/mood queries and mutation commands
//!   - `Clock` — injected time source, so TTL behavior is testable
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DescriptionBuilder` — aggregate gateway queries into one view tree
//!   - `DescriptionService` — TTL cache with single-flight rebuild
//!   - `CommandService` — device and room commands with cache invalidation
//! - Orchestrate domain objects without knowing *how* the gateway talks
//!
//! ## Dependency rule
//! Depends on `luxbridge-domain` only (plus `tokio::sync` for the cache
//! mutex). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod ports;
pub mod services;
