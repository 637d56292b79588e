//! Fundamental simulation types and math helpers.
//!
//! Positions and velocities use `glam` vectors directly. World space is
//! right-handed: x = East, y = Up, z = South (toward the default camera).
//! Entities face along +Z at yaw 0, rotating clockwise when viewed from
//! above as yaw increases.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames advanced since the match started.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}

/// Squared distance in the ground (XZ) plane, ignoring height.
pub fn horizontal_dist_sq(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    dx * dx + dz * dz
}

/// Yaw (radians around +Y) that turns the +Z forward axis at `from` toward
/// `to`, ignoring any vertical difference. This is the horizontal look used
/// to face entities at the player without tilting them.
pub fn yaw_toward(from: Vec3, to: Vec3) -> f32 {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    dx.atan2(dz)
}

/// Horizontal forward direction for a yaw angle (inverse of [`yaw_toward`]).
pub fn yaw_forward(yaw: f32) -> Vec2 {
    Vec2::new(yaw.sin(), yaw.cos())
}
