//! Headless match driver.
//!
//! Runs the simulation at a fixed 60 Hz with a scripted bot standing in for
//! the real input layer: it strafes around the arena center while firing at
//! the nearest enemy. Useful for smoke-testing the engine end to end and
//! for eyeballing balance from the log output.

use std::time::{Duration, Instant};

use glam::{Vec2, Vec3};

use crawler_core::commands::{FrameInput, PlayerCommand};
use crawler_core::events::FxEvent;
use crawler_core::state::GameSnapshot;
use crawler_sim::{SimConfig, SimulationEngine};

const DT: f32 = 1.0 / 60.0;
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Cap the run at two minutes of simulated time.
const MAX_FRAMES: u64 = 60 * 120;

fn main() {
    env_logger::init();

    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartGame);

    let mut snapshot = GameSnapshot::default();
    let mut next_tick_time = Instant::now();
    let mut ended_at: Option<u64> = None;

    for frame in 0..MAX_FRAMES {
        let input = bot_input(frame, &snapshot);
        snapshot = engine.tick(DT, &input);

        for event in &snapshot.events {
            match event {
                FxEvent::EnemyKilled { id } => log::info!("enemy {id} down"),
                FxEvent::PlayerHpChanged { hp, max_hp } => {
                    log::info!("player hp {hp}/{max_hp}");
                }
                FxEvent::Victory => log::info!("victory!"),
                FxEvent::Defeat => log::info!("defeat"),
                _ => {}
            }
        }

        // Linger a second on the end screen so the last effects play out.
        if snapshot.phase.is_ended() && ended_at.is_none() {
            ended_at = Some(frame);
        }
        if ended_at.is_some_and(|end| frame > end + 60) {
            break;
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else {
            // Too far behind; reset rather than spiral.
            next_tick_time = now;
        }
    }

    let score = serde_json::to_string_pretty(&snapshot.score).expect("score serializes");
    println!("--- match over: {:?} ---", snapshot.phase);
    println!("{score}");
}

/// Strafe in a wide circle while firing at the nearest enemy.
fn bot_input(frame: u64, snapshot: &GameSnapshot) -> FrameInput {
    let angle = frame as f32 * 0.02;
    let move_dir = Vec2::new(angle.cos(), angle.sin());

    let player = snapshot.player.position;
    let aim = snapshot
        .enemies
        .iter()
        .min_by(|a, b| {
            let da = a.position.distance_squared(player);
            let db = b.position.distance_squared(player);
            da.total_cmp(&db)
        })
        .map(|enemy| Vec3::new(enemy.position.x, 0.0, enemy.position.z));

    FrameInput {
        move_dir,
        fire: aim.is_some(),
        aim,
    }
}
