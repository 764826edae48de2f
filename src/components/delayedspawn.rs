//! Deferred coin spawn component.
//!
//! A [`DelayedSpawn`] is a one-shot timer living on its own entity. When the
//! countdown reaches zero a [`SpawnCoinEvent`](crate::events::spawncoin::SpawnCoinEvent)
//! is triggered and the timer entity is despawned. Waves and pointer bursts
//! are built by spawning several of these with staggered delays.
//!
//! The size is kept as a [`CoinSizeSpec`] and only resolved when the timer
//! fires, so a random size is drawn at firing time rather than at scheduling
//! time.
//!
//! # Related
//!
//! - [`crate::systems::delayedspawn::update_delayed_spawns`] – advances and fires these timers

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::coin::CoinSizeSpec;

#[derive(Component, Debug, Clone, Copy)]
pub struct DelayedSpawn {
    /// Seconds left before the coin is spawned.
    pub remaining: f32,
    pub size: CoinSizeSpec,
    /// Explicit origin. `None` means the viewport center at firing time.
    pub origin: Option<Vector2>,
}

impl DelayedSpawn {
    /// Schedule a coin `delay` seconds from now.
    pub fn new(delay: f32, size: CoinSizeSpec, origin: Option<Vector2>) -> Self {
        DelayedSpawn {
            remaining: delay,
            size,
            origin,
        }
    }

    /// Same as [`DelayedSpawn::new`] with the delay given in milliseconds.
    pub fn after_ms(delay_ms: u32, size: CoinSizeSpec, origin: Option<Vector2>) -> Self {
        Self::new(delay_ms as f32 / 1000.0, size, origin)
    }
}
