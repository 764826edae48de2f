//! Trigger observers.
//!
//! These observers translate the three external triggers into coin spawns:
//!
//! - [`on_page_ready`] – flash, a wave of large coins, a wave of small coins
//!   and a bounded ambient stream, all from the viewport center
//! - [`on_pointer_down`] – a staggered burst of 6 to 8 coins at the pointer
//! - [`on_touch_start`] – 5 small coins at the first touch point, all at once
//!
//! Apart from the ambient stream, nothing here keeps state: each trigger
//! schedules its spawns and forgets about them.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::ambientstream::AmbientStream;
use crate::components::coin::{CoinSize, CoinSizeSpec};
use crate::components::delayedspawn::DelayedSpawn;
use crate::events::input::{PointerDownEvent, TouchStartEvent};
use crate::events::pageready::PageReadyEvent;
use crate::events::spawncoin::SpawnCoinEvent;
use crate::resources::effectrng::EffectRng;
use crate::systems::spawn::spawn_flash;

/// Large coins in the first load wave.
pub const BIG_WAVE_COUNT: u32 = 5;
/// Delay between two coins of the first wave.
pub const BIG_WAVE_STEP_MS: u32 = 100;
/// Small coins in the second load wave.
pub const SMALL_WAVE_COUNT: u32 = 20;
/// Delay before the second wave starts.
pub const SMALL_WAVE_START_MS: u32 = 300;
/// Delay between two coins of the second wave.
pub const SMALL_WAVE_STEP_MS: u32 = 50;

/// A pointer burst has `POINTER_BURST_MIN + floor(u * POINTER_BURST_SPREAD)` coins.
pub const POINTER_BURST_MIN: u32 = 6;
pub const POINTER_BURST_SPREAD: u32 = 3;
/// Delay between two coins of a pointer burst.
pub const POINTER_BURST_STEP_MS: u32 = 30;
/// A draw strictly above this makes a pointer-burst coin large.
pub const POINTER_LARGE_ABOVE: f32 = 0.9;

/// Coins per touch start.
pub const TOUCH_BURST_COUNT: u32 = 5;

/// Play the full page-ready sequence.
pub fn on_page_ready(_trigger: On<PageReadyEvent>, mut commands: Commands) {
    debug!("page ready: flash, waves and ambient stream");
    spawn_flash(&mut commands);

    for i in 0..BIG_WAVE_COUNT {
        commands.spawn(DelayedSpawn::after_ms(
            i * BIG_WAVE_STEP_MS,
            CoinSizeSpec::Fixed(CoinSize::Large),
            None,
        ));
    }

    for i in 0..SMALL_WAVE_COUNT {
        commands.spawn(DelayedSpawn::after_ms(
            SMALL_WAVE_START_MS + i * SMALL_WAVE_STEP_MS,
            CoinSizeSpec::Fixed(CoinSize::Small),
            None,
        ));
    }

    commands.spawn(AmbientStream::default());
}

/// Burst coins at the pointer unless the press landed on an interactive control.
pub fn on_pointer_down(
    trigger: On<PointerDownEvent>,
    mut commands: Commands,
    mut rng: ResMut<EffectRng>,
) {
    let event = trigger.event();
    if event.target_is_interactive {
        return;
    }

    let burst = POINTER_BURST_MIN + (rng.f32() * POINTER_BURST_SPREAD as f32) as u32;
    debug!(
        "pointer down at ({:.0}, {:.0}): {} coins",
        event.pos.x, event.pos.y, burst
    );
    for i in 0..burst {
        commands.spawn(DelayedSpawn::after_ms(
            i * POINTER_BURST_STEP_MS,
            CoinSizeSpec::LargeAbove(POINTER_LARGE_ABOVE),
            Some(event.pos),
        ));
    }
}

/// Spawn a small burst at the first touch point, without any stagger.
pub fn on_touch_start(trigger: On<TouchStartEvent>, mut commands: Commands) {
    let event = trigger.event();
    debug!("touch start at ({:.0}, {:.0})", event.pos.x, event.pos.y);
    for _ in 0..TOUCH_BURST_COUNT {
        commands.trigger(SpawnCoinEvent::at(CoinSize::Small, event.pos));
    }
}
