//! ECS components for entities.
//!
//! Submodules overview:
//! - [`ambientstream`] – bounded repeating coin spawner created on page ready
//! - [`coin`] – a coin particle and its rolled flight parameters
//! - [`delayedspawn`] – one-shot timer that spawns a coin when it runs out
//! - [`flash`] – marker for the full-screen flash overlay
//! - [`ttl`] – scheduled removal countdown
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod ambientstream;
pub mod coin;
pub mod delayedspawn;
pub mod flash;
pub mod ttl;
pub mod zindex;
