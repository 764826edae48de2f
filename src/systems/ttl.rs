//! TTL (Time-to-live) system.
//!
//! Each frame, [`ttl_system`] decrements every [`Ttl`] by the scaled frame
//! delta and despawns the entities whose time ran out.
//!
//! Despawning goes through `try_despawn`, so an entity that was already
//! removed by other means is silently skipped.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Decrements TTL and despawns entities when it reaches zero.
pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.is_expired() {
            trace!("ttl expired for {:?} after {:.3}s", entity, ttl.duration);
            commands.entity(entity).try_despawn();
        }
    }
}
