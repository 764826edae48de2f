//! Input polling system.
//!
//! [`update_input`] reads raylib's mouse, touch and keyboard state each frame
//! and turns it into effect triggers:
//!
//! - a press of the pointer button emits a
//!   [`PointerDownEvent`](crate::events::input::PointerDownEvent), flagged as
//!   interactive when it lands on the replay button (which then also replays
//!   the page-ready sequence)
//! - when touch is enabled, the first finger going down emits a
//!   [`TouchStartEvent`](crate::events::input::TouchStartEvent); nothing is
//!   consumed, so the platform's own touch handling is unaffected
//! - the debug key emits a [`SwitchDebugEvent`]
use bevy_ecs::prelude::*;

use crate::events::input::{PointerDownEvent, TouchStartEvent};
use crate::events::pageready::PageReadyEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;
use crate::resources::replaybutton::ReplayButton;
use crate::resources::viewport::Viewport;

/// Poll Raylib for pointer, touch and keyboard input.
pub fn update_input(
    mut input: ResMut<InputState>,
    viewport: Res<Viewport>,
    button: Res<ReplayButton>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    if rl.is_key_pressed(input.debug_key) {
        commands.trigger(SwitchDebugEvent {});
    }

    if rl.is_mouse_button_pressed(input.pointer_button) {
        let pos = rl.get_mouse_position();
        let target_is_interactive = button.contains(&viewport, pos);
        commands.trigger(PointerDownEvent {
            pos,
            target_is_interactive,
        });
        if target_is_interactive {
            commands.trigger(PageReadyEvent {});
        }
    }

    if input.touch_enabled {
        let count = rl.get_touch_point_count() as u32;
        if input.touch_started(count) {
            let pos = rl.get_touch_position(0);
            commands.trigger(TouchStartEvent { pos });
        }
    }
}
