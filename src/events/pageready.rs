//! Page-ready event.
//!
//! Triggered once at startup (and again whenever the replay button is
//! pressed). The observer [`on_page_ready`](crate::systems::triggers::on_page_ready)
//! runs the flash, the two coin waves and the ambient stream.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PageReadyEvent {}
