//! Effect integration tests for triggers, deferred spawns, the ambient stream
//! and scheduled removal.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use coinburst::components::ambientstream::AmbientStream;
use coinburst::components::coin::{Coin, CoinSize, CoinSizeSpec};
use coinburst::components::delayedspawn::DelayedSpawn;
use coinburst::components::flash::FlashOverlay;
use coinburst::components::ttl::Ttl;
use coinburst::effect::{add_effect_observers, effect_schedule, insert_effect_resources};
use coinburst::events::input::{PointerDownEvent, TouchStartEvent};
use coinburst::events::pageready::PageReadyEvent;
use coinburst::events::spawncoin::SpawnCoinEvent;
use coinburst::resources::effectrng::EffectRng;
use coinburst::resources::viewport::Viewport;
use coinburst::resources::worldtime::WorldTime;
use coinburst::systems::time::update_world_time;
use coinburst::systems::ttl::ttl_system;

const EPSILON: f32 = 1e-4;
const FRAME: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

type SpawnLog = Arc<Mutex<Vec<(SpawnCoinEvent, f32)>>>;

fn make_world(seed: u64) -> World {
    let mut world = World::new();
    insert_effect_resources(&mut world, Viewport::new(800, 600), EffectRng::with_seed(seed));
    add_effect_observers(&mut world);
    world.flush();
    world
}

/// Record every spawn request together with the world time it happened at.
fn record_spawns(world: &mut World) -> SpawnLog {
    let log: SpawnLog = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    world.add_observer(move |trigger: On<SpawnCoinEvent>, time: Res<WorldTime>| {
        sink.lock().unwrap().push((*trigger.event(), time.elapsed));
    });
    world.flush();
    log
}

fn run_for(world: &mut World, schedule: &mut Schedule, seconds: f32, dt: f32) {
    let ticks = (seconds / dt).round() as usize;
    for _ in 0..ticks {
        update_world_time(world, dt);
        schedule.run(world);
    }
}

fn count<T: Component>(world: &mut World) -> usize {
    let mut q = world.query_filtered::<Entity, With<T>>();
    q.iter(world).count()
}

fn coins(world: &mut World) -> Vec<Coin> {
    let mut q = world.query::<&Coin>();
    q.iter(world).copied().collect()
}

fn pending_delays(world: &mut World) -> Vec<(f32, CoinSizeSpec, Option<Vector2>)> {
    let mut q = world.query::<&DelayedSpawn>();
    let mut delays: Vec<_> = q
        .iter(world)
        .map(|d| (d.remaining, d.size, d.origin))
        .collect();
    delays.sort_by(|a, b| a.0.total_cmp(&b.0));
    delays
}

// =============================================================================
// Page ready
// =============================================================================

#[test]
fn page_ready_spawns_exactly_56_coins() {
    let mut world = make_world(1);
    let log = record_spawns(&mut world);
    let mut schedule = effect_schedule();

    world.trigger(PageReadyEvent {});
    run_for(&mut world, &mut schedule, 8.0, FRAME);

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 5 + 20 + 31);
    assert!(log.iter().all(|(e, _)| e.origin.is_none()));
    let large = log.iter().filter(|(e, _)| e.size.is_large()).count();
    assert!(large >= 5, "at least the first wave is large, got {}", large);
}

#[test]
fn page_ready_schedules_waves_with_their_delays() {
    let mut world = make_world(2);
    world.trigger(PageReadyEvent {});

    let delays = pending_delays(&mut world);
    assert_eq!(delays.len(), 25);

    let big: Vec<f32> = delays
        .iter()
        .filter(|(_, size, _)| *size == CoinSizeSpec::Fixed(CoinSize::Large))
        .map(|(d, _, _)| *d)
        .collect();
    let small: Vec<f32> = delays
        .iter()
        .filter(|(_, size, _)| *size == CoinSizeSpec::Fixed(CoinSize::Small))
        .map(|(d, _, _)| *d)
        .collect();

    assert_eq!(big.len(), 5);
    for (i, d) in big.iter().enumerate() {
        assert!(approx_eq(*d, i as f32 * 0.1), "big coin {} at {}", i, d);
    }
    assert_eq!(small.len(), 20);
    for (i, d) in small.iter().enumerate() {
        assert!(approx_eq(*d, 0.3 + i as f32 * 0.05), "small coin {} at {}", i, d);
    }
    assert!(delays.iter().all(|(_, _, origin)| origin.is_none()));
    assert_eq!(count::<AmbientStream>(&mut world), 1);
}

#[test]
fn page_ready_waves_fire_on_time() {
    let mut world = make_world(3);
    let log = record_spawns(&mut world);
    let mut schedule = effect_schedule();

    world.trigger(PageReadyEvent {});
    // drop the ambient stream so every large coin comes from the big wave
    let streams: Vec<Entity> = {
        let mut q = world.query_filtered::<Entity, With<AmbientStream>>();
        q.iter(&world).collect()
    };
    for entity in streams {
        world.despawn(entity);
    }
    let dt = 0.005;
    run_for(&mut world, &mut schedule, 1.5, dt);

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 25);
    // big wave at 0, 100, 200, 300, 400 ms
    let big_times: Vec<f32> = log
        .iter()
        .filter(|(e, _)| e.size.is_large())
        .map(|(_, t)| *t)
        .collect();
    assert_eq!(big_times.len(), 5);
    for (i, t) in big_times.iter().enumerate() {
        let expected = i as f32 * 0.1;
        assert!(
            *t >= expected - EPSILON && *t <= expected + dt + EPSILON,
            "big coin {} fired at {}",
            i,
            t
        );
    }
}

#[test]
fn page_ready_flash_lives_800ms() {
    let mut world = make_world(4);
    let mut schedule = effect_schedule();

    world.trigger(PageReadyEvent {});
    assert_eq!(count::<FlashOverlay>(&mut world), 1);

    run_for(&mut world, &mut schedule, 0.75, 0.01);
    assert_eq!(count::<FlashOverlay>(&mut world), 1);

    run_for(&mut world, &mut schedule, 0.1, 0.01);
    assert_eq!(count::<FlashOverlay>(&mut world), 0);
}

#[test]
fn page_ready_leaves_nothing_behind() {
    let mut world = make_world(5);
    let mut schedule = effect_schedule();

    world.trigger(PageReadyEvent {});
    run_for(&mut world, &mut schedule, 12.0, FRAME);

    assert_eq!(count::<Coin>(&mut world), 0);
    assert_eq!(count::<FlashOverlay>(&mut world), 0);
    assert_eq!(count::<DelayedSpawn>(&mut world), 0);
    assert_eq!(count::<AmbientStream>(&mut world), 0);
    assert_eq!(count::<Ttl>(&mut world), 0);
}

#[test]
fn page_ready_twice_runs_two_independent_sequences() {
    let mut world = make_world(6);
    let log = record_spawns(&mut world);
    let mut schedule = effect_schedule();

    world.trigger(PageReadyEvent {});
    run_for(&mut world, &mut schedule, 1.0, FRAME);
    world.trigger(PageReadyEvent {});
    assert_eq!(count::<AmbientStream>(&mut world), 2);

    run_for(&mut world, &mut schedule, 9.0, FRAME);
    assert_eq!(log.lock().unwrap().len(), 2 * 56);
    assert_eq!(count::<AmbientStream>(&mut world), 0);
}

// =============================================================================
// Ambient stream
// =============================================================================

#[test]
fn ambient_stream_fires_31_times_then_cancels() {
    let mut world = make_world(7);
    let log = record_spawns(&mut world);
    let mut schedule = effect_schedule();

    world.spawn(AmbientStream::default());
    run_for(&mut world, &mut schedule, 10.0, 0.05);

    assert_eq!(log.lock().unwrap().len(), 31);
    assert_eq!(count::<AmbientStream>(&mut world), 0);
}

#[test]
fn ambient_stream_first_coin_after_one_period() {
    let mut world = make_world(8);
    let log = record_spawns(&mut world);
    let mut schedule = effect_schedule();

    world.spawn(AmbientStream::default());
    run_for(&mut world, &mut schedule, 0.19, 0.01);
    assert_eq!(log.lock().unwrap().len(), 0);

    run_for(&mut world, &mut schedule, 0.02, 0.01);
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn ambient_stream_catch_up_never_exceeds_limit() {
    let mut world = make_world(9);
    let log = record_spawns(&mut world);
    let mut schedule = effect_schedule();

    world.spawn(AmbientStream::default());
    // one huge frame covers the whole stream and more
    update_world_time(&mut world, 30.0);
    schedule.run(&mut world);

    assert_eq!(log.lock().unwrap().len(), 31);
    assert_eq!(count::<AmbientStream>(&mut world), 0);
}

#[test]
fn ambient_stream_coins_are_mostly_small() {
    let mut world = make_world(10);
    let log = record_spawns(&mut world);
    let mut schedule = effect_schedule();

    for _ in 0..20 {
        world.spawn(AmbientStream::default());
    }
    run_for(&mut world, &mut schedule, 7.0, 0.05);

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 20 * 31);
    let large = log.iter().filter(|(e, _)| e.size.is_large()).count();
    let ratio = large as f32 / log.len() as f32;
    assert!(ratio > 0.12 && ratio < 0.28, "large ratio {}", ratio);
}

// =============================================================================
// Pointer and touch
// =============================================================================

#[test]
fn pointer_down_on_interactive_target_spawns_nothing() {
    let mut world = make_world(11);
    let log = record_spawns(&mut world);
    let mut schedule = effect_schedule();

    world.trigger(PointerDownEvent {
        pos: Vector2 { x: 100.0, y: 200.0 },
        target_is_interactive: true,
    });
    assert_eq!(count::<DelayedSpawn>(&mut world), 0);

    run_for(&mut world, &mut schedule, 1.0, FRAME);
    assert!(log.lock().unwrap().is_empty());
    assert_eq!(count::<Coin>(&mut world), 0);
}

#[test]
fn pointer_down_schedules_staggered_burst() {
    let mut world = make_world(12);
    let pos = Vector2 { x: 100.0, y: 200.0 };

    world.trigger(PointerDownEvent {
        pos,
        target_is_interactive: false,
    });

    let delays = pending_delays(&mut world);
    assert!((6..=8).contains(&delays.len()), "burst of {}", delays.len());
    for (i, (delay, size, origin)) in delays.iter().enumerate() {
        assert!(approx_eq(*delay, i as f32 * 0.03));
        assert_eq!(*size, CoinSizeSpec::LargeAbove(0.9));
        let origin = origin.expect("pointer coins have an explicit origin");
        assert_eq!(origin.x, 100.0);
        assert_eq!(origin.y, 200.0);
    }
}

#[test]
fn pointer_down_burst_fires_at_the_pointer() {
    let mut world = make_world(13);
    let log = record_spawns(&mut world);
    let mut schedule = effect_schedule();

    world.trigger(PointerDownEvent {
        pos: Vector2 { x: 42.0, y: 24.0 },
        target_is_interactive: false,
    });
    let scheduled = count::<DelayedSpawn>(&mut world);
    let dt = 0.005;
    run_for(&mut world, &mut schedule, 0.5, dt);

    let log = log.lock().unwrap();
    assert_eq!(log.len(), scheduled);
    for (i, (event, time)) in log.iter().enumerate() {
        let origin = event.origin.unwrap();
        assert_eq!(origin.x, 42.0);
        assert_eq!(origin.y, 24.0);
        let expected = i as f32 * 0.03;
        assert!(*time >= expected - EPSILON && *time <= expected + dt + EPSILON);
    }
    assert_eq!(count::<Coin>(&mut world), scheduled);
}

#[test]
fn pointer_burst_sizes_cover_six_to_eight() {
    let mut world = make_world(14);
    let mut seen = [false; 9];

    for _ in 0..200 {
        world.trigger(PointerDownEvent {
            pos: Vector2 { x: 1.0, y: 1.0 },
            target_is_interactive: false,
        });
        let n = count::<DelayedSpawn>(&mut world);
        assert!((6..=8).contains(&n));
        seen[n] = true;

        let pending: Vec<Entity> = {
            let mut q = world.query_filtered::<Entity, With<DelayedSpawn>>();
            q.iter(&world).collect()
        };
        for entity in pending {
            world.despawn(entity);
        }
    }
    assert!(seen[6] && seen[7] && seen[8]);
}

#[test]
fn touch_start_spawns_five_small_coins_immediately() {
    let mut world = make_world(15);
    let log = record_spawns(&mut world);

    world.trigger(TouchStartEvent {
        pos: Vector2 { x: 320.0, y: 480.0 },
    });

    assert_eq!(log.lock().unwrap().len(), 5);
    let coins = coins(&mut world);
    assert_eq!(coins.len(), 5);
    for coin in coins {
        assert_eq!(coin.size, CoinSize::Small);
        assert_eq!(coin.origin.x, 320.0);
        assert_eq!(coin.origin.y, 480.0);
    }
    assert_eq!(count::<DelayedSpawn>(&mut world), 0);
}

// =============================================================================
// Spawning and removal
// =============================================================================

#[test]
fn explicit_origin_is_kept_and_missing_origin_uses_center() {
    let mut world = make_world(16);

    world.trigger(SpawnCoinEvent::at(CoinSize::Small, Vector2 { x: 100.0, y: 200.0 }));
    world.trigger(SpawnCoinEvent::at(CoinSize::Small, Vector2 { x: 0.0, y: 0.0 }));
    world.trigger(SpawnCoinEvent::centered(CoinSize::Large));

    let coins = coins(&mut world);
    assert_eq!(coins.len(), 3);
    let has_origin = |x: f32, y: f32| coins.iter().any(|c| c.origin.x == x && c.origin.y == y);
    assert!(has_origin(100.0, 200.0));
    assert!(has_origin(0.0, 0.0));
    assert!(has_origin(400.0, 300.0));
}

#[test]
fn center_follows_viewport_resize() {
    let mut world = make_world(17);

    world.resource_mut::<Viewport>().resize(390, 844);
    world.trigger(SpawnCoinEvent::centered(CoinSize::Small));

    let coins = coins(&mut world);
    assert_eq!(coins.len(), 1);
    assert_eq!(coins[0].origin.x, 195.0);
    assert_eq!(coins[0].origin.y, 422.0);
}

#[test]
fn every_coin_gets_exactly_one_matching_ttl() {
    let mut world = make_world(18);
    for _ in 0..50 {
        world.trigger(SpawnCoinEvent::centered(CoinSize::Small));
        world.trigger(SpawnCoinEvent::centered(CoinSize::Large));
    }

    let mut q = world.query::<(&Coin, Option<&Ttl>)>();
    let mut seen = 0;
    for (coin, ttl) in q.iter(&world) {
        let ttl = ttl.expect("coin spawned without a ttl");
        assert_eq!(ttl.duration, coin.duration);
        assert_eq!(ttl.remaining, coin.duration);
        seen += 1;
    }
    assert_eq!(seen, 100);
}

#[test]
fn coin_is_removed_right_after_its_duration() {
    let mut world = make_world(19);
    let mut schedule = effect_schedule();
    let dt = 0.01;

    world.trigger(SpawnCoinEvent::centered(CoinSize::Large));
    let duration = coins(&mut world)[0].duration;

    let mut removed_at = None;
    for _ in 0..400 {
        update_world_time(&mut world, dt);
        schedule.run(&mut world);
        if count::<Coin>(&mut world) == 0 {
            removed_at = Some(world.resource::<WorldTime>().elapsed);
            break;
        }
    }

    let removed_at = removed_at.expect("coin was never removed");
    assert!(removed_at >= duration - 1e-3, "removed early at {}", removed_at);
    assert!(removed_at <= duration + dt + 1e-3, "removed late at {}", removed_at);
}

#[test]
fn removing_an_already_removed_coin_is_a_no_op() {
    fn remove_all_coins(query: Query<Entity, With<Coin>>, mut commands: Commands) {
        for entity in query.iter() {
            commands.entity(entity).try_despawn();
        }
    }

    let mut world = make_world(20);
    world.trigger(SpawnCoinEvent::centered(CoinSize::Small));

    {
        let mut q = world.query::<&mut Ttl>();
        for mut ttl in q.iter_mut(&mut world) {
            ttl.remaining = 0.0;
        }
    }

    // Both the ttl and a manual removal target the same coin in one frame.
    let mut schedule = Schedule::default();
    schedule.add_systems((ttl_system, remove_all_coins));
    update_world_time(&mut world, FRAME);
    schedule.run(&mut world);
    assert_eq!(count::<Coin>(&mut world), 0);

    // and once more with nothing left
    schedule.run(&mut world);
    assert_eq!(count::<Coin>(&mut world), 0);
}

#[test]
fn time_scale_slows_removal() {
    let mut world = make_world(21);
    let mut schedule = effect_schedule();
    world.resource_mut::<WorldTime>().time_scale = 0.5;

    world.trigger(PageReadyEvent {});
    // 0.8s flash needs 1.6s of real time at half speed
    run_for(&mut world, &mut schedule, 1.2, 0.01);
    assert_eq!(count::<FlashOverlay>(&mut world), 1);
    run_for(&mut world, &mut schedule, 0.5, 0.01);
    assert_eq!(count::<FlashOverlay>(&mut world), 0);
}

#[test]
fn switch_debug_toggles_overlay() {
    use coinburst::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
    use coinburst::resources::debugmode::DebugMode;

    let mut world = make_world(22);
    world.add_observer(switch_debug_observer);
    world.flush();

    world.trigger(SwitchDebugEvent {});
    assert!(world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent {});
    assert!(!world.contains_resource::<DebugMode>());
}
