//! Time-to-live component for scheduled removal.
//!
//! Every transient element (coins, flashes) is spawned together with a
//! [`Ttl`]. The countdown starts at creation, so the removal is scheduled at
//! the same moment the element appears, and the element is despawned exactly
//! once when the countdown runs out.
//!
//! # How It Works
//!
//! 1. Entity is spawned with a `Ttl` holding its lifetime in seconds
//! 2. The `ttl_system` runs each frame:
//!    - Decrements remaining time by the scaled frame delta
//!    - When `remaining <= 0`, despawns the entity (a no-op if already gone)
//!
//! # Related
//!
//! - [`crate::systems::ttl::ttl_system`] – system that updates and despawns entities
//! - [`crate::components::delayedspawn::DelayedSpawn`] – for deferred spawns instead of despawn

use bevy_ecs::prelude::Component;

/// Time-to-live component that automatically despawns entities after a duration.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
    /// Total lifetime in seconds, as given at creation.
    pub duration: f32,
}

impl Ttl {
    /// Create a new Ttl with the given duration in seconds.
    pub fn new(seconds: f32) -> Self {
        Ttl {
            remaining: seconds,
            duration: seconds,
        }
    }

    /// Fraction of the lifetime already spent, in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (1.0 - self.remaining / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}
