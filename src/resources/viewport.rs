//! Viewport size resource.
//!
//! Tracks the window dimensions in pixels. The main loop refreshes it every
//! frame, so anything reading it sees the size after the latest resize.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Current viewport size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Viewport {
    pub fn new(w: i32, h: i32) -> Self {
        Viewport { w, h }
    }

    /// Midpoint of the viewport. Computed on every call, never cached.
    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.w as f32 / 2.0,
            y: self.h as f32 / 2.0,
        }
    }

    pub fn resize(&mut self, w: i32, h: i32) {
        self.w = w;
        self.h = h;
    }
}
