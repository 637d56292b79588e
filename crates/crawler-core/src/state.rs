//! Game state snapshot — the complete visible state returned after each tick.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{Appearance, GamePhase};
use crate::events::FxEvent;
use crate::types::SimTime;

/// Complete game state handed to the surrounding application each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub camera: CameraView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub damage_texts: Vec<DamageTextView>,
    pub score: ScoreView,
    /// One-shot events since the previous snapshot.
    pub events: Vec<FxEvent>,
}

/// Player pose and stats for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    /// Facing angle (radians around +Y).
    pub yaw: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub mp: i32,
    pub max_mp: i32,
    /// Hidden after the defeat explosion.
    pub visible: bool,
}

/// Camera pose after follow smoothing and shake.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    /// Final eye position (smoothed follow plus shake offset).
    pub position: Vec3,
    /// The shake contribution alone, for renderers that shake a parent rig.
    pub shake_offset: Vec3,
}

/// One active enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    /// Slot index; stable while the enemy is alive.
    pub id: usize,
    pub position: Vec3,
    pub yaw: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub appearance: Appearance,
}

/// One projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec3,
}

/// One burst particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec3,
    /// Euler rotation accumulated from spin.
    pub rotation: Vec3,
    /// Uniform scale; shrinks to zero over the particle's life.
    pub scale: f32,
    /// 0xRRGGBB tint.
    pub color: u32,
}

/// One floating damage number, already projected to the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageTextView {
    /// Normalized screen position (0..1 from top-left).
    pub screen: Vec2,
    pub opacity: f32,
    pub amount: i32,
    pub is_crit: bool,
    /// False when the anchor is behind the camera or off-viewport.
    pub visible: bool,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_spawned: u32,
    pub enemies_killed: u32,
    pub enemies_remaining: u32,
    pub shots_fired: u32,
    pub match_time_secs: f32,
}
