//! # luxbridge-domain
//!
//! Pure domain model for the luxbridge lighting facade.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (gateway-reported things, light-capable or not)
//! - Define **Rooms** (gateway groups holding device members)
//! - Define **Ambiances** (per-room lighting presets, read-only)
//! - Define the **Description** view — the JSON tree served to clients
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod ambiance;
pub mod description;
pub mod device;
pub mod room;
