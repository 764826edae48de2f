//! Effect systems and observers.
//!
//! Submodules overview
//! - [`ambientstream`] – emit the bounded post-load coin trickle
//! - [`delayedspawn`] – fire deferred coin spawns when their delay runs out
//! - [`input`] – read raylib input and emit pointer/touch/debug triggers
//! - [`render`] – draw coins, the flash and overlays using Raylib
//! - [`spawn`] – spawn coins and flashes with their removal scheduled
//! - [`time`] – update simulation time and delta
//! - [`triggers`] – observers for page ready, pointer down and touch start
//! - [`ttl`] – remove expired coins and flashes

pub mod ambientstream;
pub mod delayedspawn;
pub mod input;
pub mod render;
pub mod spawn;
pub mod time;
pub mod triggers;
pub mod ttl;
