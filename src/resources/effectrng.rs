//! Random source for the effect.
//!
//! All draws (coin angles, distances, durations, sizes, burst counts) come
//! from this one resource so a seed makes a whole run reproducible.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug)]
pub struct EffectRng(pub Rng);

impl Default for EffectRng {
    fn default() -> Self {
        EffectRng(Rng::new())
    }
}

impl EffectRng {
    pub fn with_seed(seed: u64) -> Self {
        EffectRng(Rng::with_seed(seed))
    }

    /// Uniform float in [0, 1).
    pub fn f32(&mut self) -> f32 {
        self.0.f32()
    }
}
