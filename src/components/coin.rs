//! Coin particle component.
//!
//! A [`Coin`] is a single short-lived particle thrown outwards from an origin
//! point. All of its randomized parameters are rolled once at spawn time by
//! [`Coin::roll`] and never change afterwards; the renderer only reads them
//! together with the entity's [`Ttl`](crate::components::ttl::Ttl) to work out
//! where the coin currently is.
//!
//! # Size classes
//!
//! | size  | distance (px) | duration (s) |
//! |-------|---------------|--------------|
//! | Small | [150, 450)    | [1.0, 2.0)   |
//! | Large | [250, 500)    | [1.5, 2.5)   |
//!
//! # Related
//!
//! - [`crate::systems::spawn::spawn_coin_observer`] – rolls and spawns coins
//! - [`crate::systems::ttl::ttl_system`] – removes them once their time is up

use std::f32::consts::TAU;

use bevy_ecs::prelude::Component;
use fastrand::Rng;
use raylib::prelude::Vector2;

/// Size class of a coin. Large coins are drawn bigger, fly further and live longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoinSize {
    #[default]
    Small,
    Large,
}

impl CoinSize {
    pub fn from_large(is_large: bool) -> Self {
        if is_large {
            CoinSize::Large
        } else {
            CoinSize::Small
        }
    }

    pub fn is_large(self) -> bool {
        matches!(self, CoinSize::Large)
    }

    /// Half-open travel distance range in pixels, as `(min, max)`.
    pub fn distance_range(self) -> (f32, f32) {
        match self {
            CoinSize::Small => (150.0, 450.0),
            CoinSize::Large => (250.0, 500.0),
        }
    }

    /// Half-open lifetime range in seconds, as `(min, max)`.
    pub fn duration_range(self) -> (f32, f32) {
        match self {
            CoinSize::Small => (1.0, 2.0),
            CoinSize::Large => (1.5, 2.5),
        }
    }
}

/// How the size of a deferred coin is chosen when it finally fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoinSizeSpec {
    /// Always the given size.
    Fixed(CoinSize),
    /// Large when a uniform draw in [0, 1) is strictly above the threshold.
    LargeAbove(f32),
}

impl Default for CoinSizeSpec {
    fn default() -> Self {
        CoinSizeSpec::Fixed(CoinSize::Small)
    }
}

impl CoinSizeSpec {
    /// Pick the concrete size. `Fixed` never touches the random source.
    pub fn resolve(&self, rng: &mut Rng) -> CoinSize {
        match *self {
            CoinSizeSpec::Fixed(size) => size,
            CoinSizeSpec::LargeAbove(threshold) => CoinSize::from_large(rng.f32() > threshold),
        }
    }
}

/// A coin in flight.
///
/// `origin` is where the animation starts (viewport coordinates) and `delta`
/// is the terminal offset from the origin, `(cos(angle), sin(angle)) * distance`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Coin {
    pub size: CoinSize,
    pub origin: Vector2,
    /// Direction in radians, in [0, 2π).
    pub angle: f32,
    pub distance: f32,
    /// Lifetime in seconds.
    pub duration: f32,
    pub delta: Vector2,
}

impl Coin {
    /// Roll a coin's direction, distance and duration for the given size.
    pub fn roll(size: CoinSize, origin: Vector2, rng: &mut Rng) -> Self {
        let angle = sample_range(rng, 0.0, TAU);
        let (dist_min, dist_max) = size.distance_range();
        let distance = sample_range(rng, dist_min, dist_max);
        let (dur_min, dur_max) = size.duration_range();
        let duration = sample_range(rng, dur_min, dur_max);

        Coin {
            size,
            origin,
            angle,
            distance,
            duration,
            delta: Vector2 {
                x: angle.cos() * distance,
                y: angle.sin() * distance,
            },
        }
    }

    /// Position along the flight path for an eased progress `t` in [0, 1].
    pub fn position_at(&self, t: f32) -> Vector2 {
        let t = t.clamp(0.0, 1.0);
        Vector2 {
            x: self.origin.x + self.delta.x * t,
            y: self.origin.y + self.delta.y * t,
        }
    }

    /// Terminal position of the animation.
    pub fn destination(&self) -> Vector2 {
        self.position_at(1.0)
    }
}

/// Sample a float uniformly in the half-open range `[min, max)`.
///
/// Rounding can push `min + u * (max - min)` onto `max` itself, so the result
/// is capped at the largest float below `max`.
#[inline]
pub fn sample_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    let value = min + rng.f32() * range;
    if value >= max { below(max) } else { value }
}

#[inline]
fn below(x: f32) -> f32 {
    // only used with positive, finite bounds
    f32::from_bits(x.to_bits() - 1)
}
