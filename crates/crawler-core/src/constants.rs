//! Simulation constants and tuning parameters.

use glam::Vec3;

/// Longest time step one frame may integrate (seconds). Host frames slower
/// than this are clamped to avoid tunneling and steering instability.
pub const MAX_FRAME_DT: f32 = 0.1;

// --- Player ---

/// Player ground speed (units/s). Faster than any enemy.
pub const PLAYER_SPEED: f32 = 20.0;

/// Player hit points.
pub const PLAYER_MAX_HP: i32 = 100;

/// Player mana points (displayed only).
pub const PLAYER_MAX_MP: i32 = 50;

/// Seconds between shots (10 shots per second).
pub const FIRE_INTERVAL: f32 = 0.1;

/// How far in front of the player projectiles spawn.
pub const MUZZLE_OFFSET: f32 = 1.0;

/// Launch height of projectiles (waist height).
pub const MUZZLE_HEIGHT: f32 = 1.0;

/// Viewports narrower than this use the mobile aim heuristic
/// (face the movement direction instead of the aim target).
pub const NARROW_VIEWPORT_PX: f32 = 900.0;

// --- Enemies ---

/// Enemy slot capacity. Spawning into a full system is a silent no-op.
pub const ENEMY_CAPACITY: usize = 100;

/// Enemy hit points.
pub const ENEMY_MAX_HP: i32 = 50;

/// Enemy speed range (units/s); randomized per spawn in [min, max).
pub const ENEMY_SPEED_MIN: f32 = 5.0;
pub const ENEMY_SPEED_MAX: f32 = 8.0;

/// Melee attack reach.
pub const ATTACK_RANGE: f32 = 2.2;

/// Damage per melee hit.
pub const ATTACK_DAMAGE: i32 = 10;

/// Seconds between melee hits (one attack per second).
pub const ATTACK_INTERVAL: f32 = 1.0;

/// Enemies closer than this to the player are pushed back.
pub const MIN_PLAYER_DIST: f32 = 2.0;

/// Strength of the push-back per unit of overlap.
pub const PLAYER_REPULSION_GAIN: f32 = 2.0;

/// Neighbors inside this radius contribute to separation steering.
pub const SEPARATION_RADIUS: f32 = 2.5;

/// Weight of the averaged separation term.
pub const SEPARATION_FORCE: f32 = 2.0;

/// Pairs closer than this are skipped by separation (degenerate direction).
pub const SEPARATION_EPSILON: f32 = 0.001;

/// Every enemy visual is normalized to this world height.
pub const ENEMY_TARGET_HEIGHT: f32 = 2.0;

/// Collision cylinder used when an enemy has no measurable visual.
pub const DEFAULT_BODY_RADIUS: f32 = 1.0;
pub const DEFAULT_BODY_HEIGHT: f32 = 2.0;

/// Extra collision radius so hits feel forgiving.
pub const HIT_PADDING: f32 = 0.5;

/// Vertical leeway above and below the collision cylinder.
pub const VERTICAL_HIT_MARGIN: f32 = 0.5;

// --- Projectiles ---

/// Projectile speed (units/s); direction is normalized at launch.
pub const PROJECTILE_SPEED: f32 = 40.0;

/// Projectile lifetime (seconds).
pub const PROJECTILE_LIFETIME: f32 = 2.0;

/// Projectile collision radius.
pub const PROJECTILE_RADIUS: f32 = 0.2;

/// Projectile pool pre-warm size. The pool grows past this under
/// starvation instead of failing a spawn.
pub const PROJECTILE_POOL_SIZE: usize = 200;

// --- Damage ---

/// Base projectile damage.
pub const BASE_DAMAGE: i32 = 25;

/// Chance of a critical hit.
pub const CRIT_CHANCE: f64 = 0.2;

/// Critical hits deal double damage.
pub const CRIT_MULTIPLIER: i32 = 2;

// --- Camera ---

/// Fixed camera offset from the player (high-angle top-down view).
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 20.0, 10.0);

/// Exponential follow rate: `pos += (target - pos) * rate * dt`.
pub const CAMERA_FOLLOW_RATE: f32 = 25.0;

/// Perspective projection parameters.
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// --- Effects ---

/// Particle lifetime (seconds).
pub const PARTICLE_LIFETIME: f32 = 1.0;

/// Downward acceleration applied to particles (units/s²).
pub const PARTICLE_GRAVITY: f32 = 20.0;

/// Upward launch speed range for burst particles.
pub const PARTICLE_UP_MIN: f32 = 5.0;
pub const PARTICLE_UP_MAX: f32 = 15.0;

/// Horizontal launch speed spread: x and z drawn from [-spread/2, spread/2).
pub const PARTICLE_SPREAD: f32 = 10.0;

/// Horizontal position jitter applied at burst origin.
pub const PARTICLE_JITTER: f32 = 0.5;

/// Edge length of the particle cube visual.
pub const PARTICLE_SIZE: f32 = 0.3;

/// Particles per enemy death explosion.
pub const EXPLOSION_PARTICLE_COUNT: u32 = 8;

/// Particles for the player death explosion.
pub const PLAYER_DEATH_PARTICLE_COUNT: u32 = 16;

/// Burst tints (0xRRGGBB).
pub const ENEMY_DEATH_COLOR: u32 = 0xff0000;
pub const PLAYER_DEATH_COLOR: u32 = 0x3498db;

/// Screen shake applied when the player takes a melee hit.
pub const DAMAGE_SHAKE_INTENSITY: f32 = 0.5;
pub const DAMAGE_SHAKE_DURATION: f32 = 0.2;

/// Floating damage text lifetime (seconds).
pub const TEXT_LIFETIME: f32 = 1.0;

/// Downward acceleration applied to floating text (units/s²).
pub const TEXT_GRAVITY: f32 = 5.0;

/// Initial upward speed of floating text.
pub const TEXT_RISE_SPEED: f32 = 3.0;

/// Horizontal drift spread: x and z drawn from [-spread/2, spread/2).
pub const TEXT_DRIFT: f32 = 2.0;

/// Text fades out over this final portion of its life.
pub const TEXT_FADE_START: f32 = 0.5;

// --- Visual geometry ---

/// Fallback enemy box extents (used when no templates are configured).
pub const FALLBACK_BOX_SIZE: Vec3 = Vec3::new(1.0, 2.0, 1.0);

/// Projectile orb extents (sphere of radius 0.2).
pub const PROJECTILE_ORB_SIZE: f32 = 0.4;

/// Geometry shorter than this skips height normalization entirely.
pub const DEGENERATE_HEIGHT_EPS: f32 = 0.001;

// --- Arena setup ---

/// Number of spawn attempts for the opening wave. Attempts that land in
/// the center exclusion zone are skipped, so fewer enemies may appear.
pub const OPENING_WAVE_ATTEMPTS: u32 = 20;

/// Opening wave spawn area edge length, centered on the origin.
pub const SPAWN_AREA: f32 = 40.0;

/// Half-extent of the center exclusion zone kept clear around the player.
pub const SPAWN_EXCLUSION: f32 = 5.0;

/// Enemies spawn at this height; steering settles them toward the ground.
pub const ENEMY_SPAWN_HEIGHT: f32 = 1.0;
