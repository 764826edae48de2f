//! On-screen replay button.
//!
//! The only interactive control in the window. Pointer presses that land on
//! it are flagged as interactive (so they do not burst coins) and replay the
//! page-ready sequence instead. The button is anchored to the top-right
//! corner, so its bounds depend on the viewport at the time of the query.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::viewport::Viewport;

#[derive(Resource, Debug, Clone)]
pub struct ReplayButton {
    pub width: f32,
    pub height: f32,
    /// Distance from the top and right viewport edges.
    pub margin: f32,
    pub label: String,
}

impl Default for ReplayButton {
    fn default() -> Self {
        Self {
            width: 110.0,
            height: 36.0,
            margin: 16.0,
            label: "REPLAY".to_string(),
        }
    }
}

impl ReplayButton {
    pub fn bounds(&self, viewport: &Viewport) -> Rectangle {
        Rectangle {
            x: viewport.w as f32 - self.margin - self.width,
            y: self.margin,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, viewport: &Viewport, point: Vector2) -> bool {
        let r = self.bounds(viewport);
        point.x >= r.x && point.x <= r.x + r.width && point.y >= r.y && point.y <= r.y + r.height
    }
}
