//! Deferred spawn system.
//!
//! Advances every [`DelayedSpawn`] timer and, when one runs out, resolves its
//! size and triggers a [`SpawnCoinEvent`]. The timer entity is removed in the
//! same step, so each scheduled spawn fires exactly once.
//!
//! Timers that expire in the same frame fire in query order; nothing in the
//! effect depends on their relative order.

use bevy_ecs::prelude::*;

use crate::components::delayedspawn::DelayedSpawn;
use crate::events::spawncoin::SpawnCoinEvent;
use crate::resources::effectrng::EffectRng;
use crate::resources::worldtime::WorldTime;

pub fn update_delayed_spawns(
    world_time: Res<WorldTime>,
    mut rng: ResMut<EffectRng>,
    mut query: Query<(Entity, &mut DelayedSpawn)>,
    mut commands: Commands,
) {
    for (entity, mut pending) in query.iter_mut() {
        pending.remaining -= world_time.delta;
        if pending.remaining <= 0.0 {
            let size = pending.size.resolve(&mut rng.0);
            commands.trigger(SpawnCoinEvent {
                size,
                origin: pending.origin,
            });
            commands.entity(entity).try_despawn();
        }
    }
}
