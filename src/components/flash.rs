//! Full-screen flash overlay marker.
//!
//! A flash covers the whole viewport and fades out. It carries no data of its
//! own: its lifetime lives in the [`Ttl`](crate::components::ttl::Ttl) it is
//! spawned with and its size is always the current viewport.

use bevy_ecs::prelude::Component;

/// Lifetime of a flash overlay in seconds.
pub const FLASH_DURATION: f32 = 0.8;

/// Marker for the full-viewport flash spawned on page ready.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct FlashOverlay;
