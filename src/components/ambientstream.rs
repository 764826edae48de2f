//! Ambient coin stream component.
//!
//! After the page-ready waves, a low-rate trickle of coins keeps falling out
//! of the viewport center for a few seconds. The stream is an entity owned by
//! the page-ready invocation that created it: it counts its own firings and
//! despawns itself once the bound is reached, so two page-ready events give
//! two independent streams.
//!
//! The first firing happens one full period after creation.

use bevy_ecs::prelude::Component;

use crate::components::coin::CoinSizeSpec;

/// Seconds between two ambient coins.
pub const AMBIENT_PERIOD: f32 = 0.2;
/// Total number of coins an ambient stream emits before it is cancelled.
pub const AMBIENT_FIRINGS: u32 = 31;
/// A draw strictly above this makes an ambient coin large.
pub const AMBIENT_LARGE_ABOVE: f32 = 0.8;

#[derive(Component, Debug, Clone, Copy)]
pub struct AmbientStream {
    pub period: f32,
    /// Time accumulated since the last firing.
    pub elapsed: f32,
    /// Firings so far.
    pub fired: u32,
    /// Firings allowed in total.
    pub limit: u32,
    pub size: CoinSizeSpec,
}

impl Default for AmbientStream {
    fn default() -> Self {
        Self {
            period: AMBIENT_PERIOD,
            elapsed: 0.0,
            fired: 0,
            limit: AMBIENT_FIRINGS,
            size: CoinSizeSpec::LargeAbove(AMBIENT_LARGE_ABOVE),
        }
    }
}

impl AmbientStream {
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.fired)
    }

    pub fn is_finished(&self) -> bool {
        self.fired >= self.limit
    }
}
