//! Events emitted by the simulation for HUD, audio, and VFX glue.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One-shot notifications drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FxEvent {
    /// A projectile hit dealt damage; a floating number was spawned.
    DamageNumber {
        position: Vec3,
        amount: i32,
        is_crit: bool,
    },
    /// A particle burst was triggered (0xRRGGBB tint).
    Explosion {
        position: Vec3,
        color: u32,
        count: u32,
    },
    /// Screen shake was triggered.
    Shake { intensity: f32, duration: f32 },
    /// Player hit points changed (damage or heal).
    PlayerHpChanged { hp: i32, max_hp: i32 },
    /// An enemy slot was activated.
    EnemySpawned { id: usize },
    /// An enemy was destroyed.
    EnemyKilled { id: usize },
    /// Every enemy destroyed. Emitted exactly once per match.
    Victory,
    /// Player hit points reached zero. Emitted exactly once per match.
    Defeat,
}
