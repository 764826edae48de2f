//! Ambient stream system.
//!
//! Accumulates time on every [`AmbientStream`] and emits one centered coin
//! per elapsed period. A large frame delta catches up with several firings,
//! but never past the stream's limit. Once the limit is reached the stream
//! entity is despawned, which cancels it for good.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::ambientstream::AmbientStream;
use crate::events::spawncoin::SpawnCoinEvent;
use crate::resources::effectrng::EffectRng;
use crate::resources::worldtime::WorldTime;

pub fn ambient_stream_system(
    world_time: Res<WorldTime>,
    mut rng: ResMut<EffectRng>,
    mut query: Query<(Entity, &mut AmbientStream)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut stream) in query.iter_mut() {
        if stream.period > 0.0 {
            stream.elapsed += dt;
            // Catch-up loop: fire multiple times if dt is large
            while stream.elapsed >= stream.period && !stream.is_finished() {
                let size = stream.size.resolve(&mut rng.0);
                commands.trigger(SpawnCoinEvent::centered(size));
                stream.elapsed -= stream.period;
                stream.fired += 1;
            }
        }

        if stream.is_finished() {
            debug!("ambient stream {:?} done after {} coins", entity, stream.fired);
            commands.entity(entity).try_despawn();
        }
    }
}
