//! Coinburst main entry point.
//!
//! A festive coin explosion written in Rust using:
//! - **raylib** for windowing, input, and drawing
//! - **bevy_ecs** for entities, timers, and trigger observers
//!
//! On startup a white flash fills the window and coins burst out of its
//! center in two waves, followed by a short ambient trickle. Clicking (or
//! touching, when enabled) anywhere throws more coins from that point. The
//! REPLAY button in the top-right corner plays the startup sequence again.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 2026
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use coinburst::effect::{add_effect_observers, effect_schedule, insert_effect_resources};
use coinburst::events::pageready::PageReadyEvent;
use coinburst::events::switchdebug::switch_debug_observer;
use coinburst::resources::effectconfig::{DEFAULT_CONFIG_PATH, EffectConfig};
use coinburst::resources::effectrng::EffectRng;
use coinburst::resources::input::InputState;
use coinburst::resources::viewport::Viewport;
use coinburst::systems::ambientstream::ambient_stream_system;
use coinburst::systems::input::update_input;
use coinburst::systems::render::render_system;
use coinburst::systems::time::update_world_time;
use coinburst::systems::ttl::ttl_system;
use log::{info, warn};
use std::path::PathBuf;

/// Coinburst: coins explode wherever you click.
#[derive(Parser)]
#[command(version, about = "Animated coin bursts with a flash on startup.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seed for the random source, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the startup flash and coin waves.
    #[arg(long)]
    no_load_effect: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = EffectConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{} ({}), using defaults", e, cli.config.display());
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Coinburst");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    info!(
        "Window {}x{} at {} fps",
        rl.get_screen_width(),
        rl.get_screen_height(),
        config.target_fps
    );

    // --------------- ECS world + resources ---------------
    let rng = match cli.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            EffectRng::with_seed(seed)
        }
        None => EffectRng::default(),
    };
    let viewport = Viewport::new(rl.get_screen_width(), rl.get_screen_height());

    let mut world = World::new();
    insert_effect_resources(&mut world, viewport, rng);
    world.insert_resource(InputState::default().with_touch(config.touch_input));
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    add_effect_observers(&mut world);
    world.add_observer(switch_debug_observer);
    world.flush();

    let mut update = effect_schedule();
    update.add_systems(update_input.before(ttl_system));
    update.add_systems(render_system.after(ambient_stream_system));
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    if !cli.no_load_effect {
        world.trigger(PageReadyEvent {});
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        // Update viewport each frame (may change due to resize)
        let (new_w, new_h, dt) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height(), rl.get_frame_time())
        };
        world.resource_mut::<Viewport>().resize(new_w, new_h);

        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();
    }
    info!("Bye!");
}
