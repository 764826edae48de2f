//! World setup for the coin effect.
//!
//! Shared by the binary and the integration tests so both run the effect
//! with the same resources, observers and system order.
//!
//! # Frame order
//!
//! 1. (binary only) poll input and emit triggers
//! 2. count down TTLs and remove expired coins/flashes
//! 3. fire deferred spawns whose delay ran out
//! 4. advance ambient streams
//!
//! TTLs are counted down before anything new is spawned, so an element never
//! loses time in the frame it appears in.
//! 5. (binary only) render

use bevy_ecs::prelude::*;

use crate::resources::effectrng::EffectRng;
use crate::resources::input::InputState;
use crate::resources::replaybutton::ReplayButton;
use crate::resources::viewport::Viewport;
use crate::resources::worldtime::WorldTime;
use crate::systems::ambientstream::ambient_stream_system;
use crate::systems::delayedspawn::update_delayed_spawns;
use crate::systems::spawn::spawn_coin_observer;
use crate::systems::triggers::{on_page_ready, on_pointer_down, on_touch_start};
use crate::systems::ttl::ttl_system;

/// Insert the resources the effect systems and observers read.
pub fn insert_effect_resources(world: &mut World, viewport: Viewport, rng: EffectRng) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(viewport);
    world.insert_resource(rng);
    world.init_resource::<InputState>();
    world.init_resource::<ReplayButton>();
}

/// Register the trigger and spawn observers.
pub fn add_effect_observers(world: &mut World) {
    world.add_observer(on_page_ready);
    world.add_observer(on_pointer_down);
    world.add_observer(on_touch_start);
    world.add_observer(spawn_coin_observer);
}

/// Schedule advancing timers, streams and removals by one frame.
pub fn effect_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems((ttl_system, update_delayed_spawns, ambient_stream_system).chain());
    update
}
