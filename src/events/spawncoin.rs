//! Coin spawn request.
//!
//! Every coin in the effect goes through this event, whether it comes from a
//! wave, the ambient stream, a pointer burst or a touch. The size is already
//! resolved; the origin is still optional and falls back to the viewport
//! center in [`spawn_coin_observer`](crate::systems::spawn::spawn_coin_observer).

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::coin::CoinSize;

#[derive(Event, Debug, Clone, Copy)]
pub struct SpawnCoinEvent {
    pub size: CoinSize,
    /// `None` spawns at the viewport center. `Some((0, 0))` is a real origin.
    pub origin: Option<Vector2>,
}

impl SpawnCoinEvent {
    pub fn centered(size: CoinSize) -> Self {
        SpawnCoinEvent { size, origin: None }
    }

    pub fn at(size: CoinSize, origin: Vector2) -> Self {
        SpawnCoinEvent {
            size,
            origin: Some(origin),
        }
    }
}
