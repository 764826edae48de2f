//! Spawning of coins and flashes.
//!
//! Both kinds of element are spawned together with their [`Ttl`], which is
//! the only place their removal is ever scheduled.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::trace;
use raylib::prelude::Vector2;

use crate::components::coin::{Coin, CoinSize};
use crate::components::flash::{FLASH_DURATION, FlashOverlay};
use crate::components::ttl::Ttl;
use crate::components::zindex::ZIndex;
use crate::events::spawncoin::SpawnCoinEvent;
use crate::resources::effectrng::EffectRng;
use crate::resources::viewport::Viewport;

const SMALL_COIN_Z: i32 = 0;
const LARGE_COIN_Z: i32 = 1;
const FLASH_Z: i32 = 10;

/// Roll a coin and spawn it with its removal already scheduled.
///
/// Without an explicit origin the coin starts at the viewport center as it is
/// right now.
pub fn spawn_coin(
    commands: &mut Commands,
    rng: &mut Rng,
    viewport: &Viewport,
    size: CoinSize,
    origin: Option<Vector2>,
) -> Entity {
    let origin = origin.unwrap_or_else(|| viewport.center());
    let coin = Coin::roll(size, origin, rng);
    let z = if size.is_large() {
        LARGE_COIN_Z
    } else {
        SMALL_COIN_Z
    };
    let entity = commands.spawn((coin, Ttl::new(coin.duration), ZIndex(z))).id();
    trace!(
        "coin {:?} {:?} at ({:.1}, {:.1}) -> ({:.1}, {:.1}) for {:.2}s",
        entity, size, origin.x, origin.y, coin.delta.x, coin.delta.y, coin.duration
    );
    entity
}

/// Spawn a full-screen flash that removes itself after [`FLASH_DURATION`].
pub fn spawn_flash(commands: &mut Commands) -> Entity {
    commands
        .spawn((FlashOverlay, Ttl::new(FLASH_DURATION), ZIndex(FLASH_Z)))
        .id()
}

/// Observer that turns every [`SpawnCoinEvent`] into a coin entity.
pub fn spawn_coin_observer(
    trigger: On<SpawnCoinEvent>,
    mut commands: Commands,
    viewport: Res<Viewport>,
    mut rng: ResMut<EffectRng>,
) {
    let event = trigger.event();
    spawn_coin(&mut commands, &mut rng.0, &viewport, event.size, event.origin);
}
