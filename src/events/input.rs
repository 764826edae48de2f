//! Pointer and touch events.
//!
//! These are the two user-driven triggers. They are produced by the input
//! polling system from raylib state, but nothing in the effect code depends
//! on raylib input: tests trigger them directly on the world.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

/// A pointer button went down somewhere in the viewport.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerDownEvent {
    /// Pointer position in viewport coordinates.
    pub pos: Vector2,
    /// Whether the press landed on an interactive control (e.g. a button).
    pub target_is_interactive: bool,
}

/// The first finger touched the screen.
#[derive(Event, Debug, Clone, Copy)]
pub struct TouchStartEvent {
    /// Position of the first active touch point.
    pub pos: Vector2,
}
