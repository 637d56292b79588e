//! Arena setup: the opening enemy wave.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crawler_core::constants::{
    ENEMY_SPAWN_HEIGHT, OPENING_WAVE_ATTEMPTS, SPAWN_AREA, SPAWN_EXCLUSION,
};
use crawler_core::events::FxEvent;

use crate::props::PropStore;
use crate::systems::enemies::EnemySystem;

/// Scatter the opening wave across the arena, keeping the center clear so
/// the player never spawns inside an enemy. Attempts that land in the
/// exclusion zone are dropped, so the wave may come up slightly short.
pub fn spawn_opening_wave(
    enemies: &mut EnemySystem,
    props: &mut PropStore,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<FxEvent>,
) {
    for _ in 0..OPENING_WAVE_ATTEMPTS {
        let x = (rng.gen::<f32>() - 0.5) * SPAWN_AREA;
        let z = (rng.gen::<f32>() - 0.5) * SPAWN_AREA;
        if x.abs() < SPAWN_EXCLUSION && z.abs() < SPAWN_EXCLUSION {
            continue;
        }
        enemies.spawn(Vec3::new(x, ENEMY_SPAWN_HEIGHT, z), props, rng, events);
    }
}
