//! Event types and observers used by the effect.
//!
//! Submodules:
//! - [`input`] – pointer-down and touch-start triggers
//! - [`pageready`] – the startup trigger that plays the full load sequence
//! - [`spawncoin`] – request to spawn a single coin
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod input;
pub mod pageready;
pub mod spawncoin;
pub mod switchdebug;
