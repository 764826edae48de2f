//! Coinburst library.
//!
//! Exposes the effect's ECS components, resources, systems, and events for
//! use in integration tests and by the `coinburst` binary.

pub mod components;
pub mod effect;
pub mod events;
pub mod resources;
pub mod systems;
