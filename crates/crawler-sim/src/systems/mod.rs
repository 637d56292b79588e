//! Per-frame entity systems, run by the engine in a fixed order:
//! projectiles advance, enemies steer, collisions resolve, effects update.

pub mod effects;
pub mod enemies;
pub mod projectiles;
