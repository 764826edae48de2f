//! Rendering system.
//!
//! Draws the whole frame with raylib: coins along their eased flight paths,
//! the flash overlay, the replay button and, in debug mode, a small stats
//! overlay. Coin and flash placement only depends on their components and
//! [`Ttl`] progress, so the effect logic never touches raylib.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::coin::Coin;
use crate::components::flash::FlashOverlay;
use crate::components::ttl::Ttl;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::replaybutton::ReplayButton;
use crate::resources::viewport::Viewport;

const BACKGROUND: Color = Color::new(120, 12, 18, 255);
const COIN_FACE: Color = Color::new(255, 200, 40, 255);
const COIN_RIM: Color = Color::new(190, 120, 10, 255);
const BUTTON_FILL: Color = Color::new(250, 220, 120, 255);
const BUTTON_TEXT: Color = Color::new(110, 10, 10, 255);
const SMALL_COIN_RADIUS: f32 = 11.0;
const LARGE_COIN_RADIUS: f32 = 18.0;
/// Starting opacity of the flash overlay.
const FLASH_ALPHA: f32 = 0.8;
/// Coins start fading after this fraction of their life.
const FADE_START: f32 = 0.7;

/// Cubic ease-out: fast launch, slow landing.
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Opacity of a coin for a linear life progress `t`.
pub fn coin_alpha(t: f32) -> f32 {
    if t <= FADE_START {
        1.0
    } else {
        (1.0 - (t - FADE_START) / (1.0 - FADE_START)).clamp(0.0, 1.0)
    }
}

/// Opacity of the flash overlay for a linear life progress `t`.
pub fn flash_alpha(t: f32) -> f32 {
    FLASH_ALPHA * (1.0 - t.clamp(0.0, 1.0))
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha) as u8)
}

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    viewport: Res<Viewport>,
    button: Res<ReplayButton>,
    coins: Query<(&Coin, &Ttl, &ZIndex)>,
    flashes: Query<&Ttl, With<FlashOverlay>>,
    debug_mode: Option<Res<DebugMode>>,
) {
    let mut to_draw: Vec<(&Coin, &Ttl, &ZIndex)> = coins.iter().collect();
    to_draw.sort_by_key(|(_, _, z)| **z);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND);

    for (coin, ttl, _z) in to_draw.iter() {
        let t = ttl.progress();
        let pos = coin.position_at(ease_out(t));
        let alpha = coin_alpha(t);
        let radius = if coin.size.is_large() {
            LARGE_COIN_RADIUS
        } else {
            SMALL_COIN_RADIUS
        };
        d.draw_circle_v(pos, radius, with_alpha(COIN_RIM, alpha));
        d.draw_circle_v(pos, radius * 0.78, with_alpha(COIN_FACE, alpha));
        // yen mark: a V over two bars
        let (x, y) = (pos.x, pos.y);
        let s = radius * 0.4;
        let ink = with_alpha(COIN_RIM, alpha);
        d.draw_line_v(Vector2 { x: x - s, y: y - s }, Vector2 { x, y }, ink);
        d.draw_line_v(Vector2 { x: x + s, y: y - s }, Vector2 { x, y }, ink);
        d.draw_line_v(Vector2 { x, y }, Vector2 { x, y: y + s }, ink);
        let bar_y = y + s * 0.2;
        d.draw_line_v(
            Vector2 { x: x - s * 0.6, y: bar_y },
            Vector2 { x: x + s * 0.6, y: bar_y },
            ink,
        );
    }

    for ttl in flashes.iter() {
        d.draw_rectangle(
            0,
            0,
            viewport.w,
            viewport.h,
            with_alpha(Color::WHITE, flash_alpha(ttl.progress())),
        );
    }

    let bounds = button.bounds(&viewport);
    d.draw_rectangle_rec(bounds, BUTTON_FILL);
    d.draw_rectangle_lines_ex(bounds, 2.0, BUTTON_TEXT);
    d.draw_text(
        &button.label,
        (bounds.x + 18.0) as i32,
        (bounds.y + 9.0) as i32,
        20,
        BUTTON_TEXT,
    );

    if debug_mode.is_some() {
        let fps = d.get_fps();
        let text = format!(
            "FPS: {} | coins: {} | flashes: {} | {}x{}",
            fps,
            to_draw.len(),
            flashes.iter().count(),
            viewport.w,
            viewport.h
        );
        d.draw_text(&text, 10, 10, 10, Color::WHITE);
    }
}
