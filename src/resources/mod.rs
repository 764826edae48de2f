//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `effectconfig` – window and input settings from `config.ini`
//! - `effectrng` – the single random source for every draw
//! - `input` – input bindings and touch edge tracking
//! - `replaybutton` – bounds of the on-screen replay control
//! - `viewport` – current window dimensions and their center
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod effectconfig;
pub mod effectrng;
pub mod input;
pub mod replaybutton;
pub mod viewport;
pub mod worldtime;
