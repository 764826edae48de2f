//! Per-frame input bindings and edge tracking.
//!
//! Raylib reports touch points as a level (how many fingers are down now),
//! while the effect reacts to touch *starts*. [`InputState`] remembers the
//! previous count so the polling system can detect the 0 → n transition.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Mouse button that produces pointer-down events.
    pub pointer_button: MouseButton,
    /// Key that toggles the debug overlay.
    pub debug_key: KeyboardKey,
    /// Whether touch points are polled at all.
    pub touch_enabled: bool,
    /// Touch points seen in the previous frame.
    pub last_touch_count: u32,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer_button: MouseButton::MOUSE_BUTTON_LEFT,
            debug_key: KeyboardKey::KEY_F11,
            touch_enabled: false,
            last_touch_count: 0,
        }
    }
}

impl InputState {
    pub fn with_touch(mut self, enabled: bool) -> Self {
        self.touch_enabled = enabled;
        self
    }

    /// Record this frame's touch count and report whether a touch just started.
    pub fn touch_started(&mut self, count: u32) -> bool {
        let started = self.last_touch_count == 0 && count > 0;
        self.last_touch_count = count;
        started
    }
}
