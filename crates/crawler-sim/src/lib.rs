//! Simulation engine for the Void Crawler arena.
//!
//! Owns all entity state, advances it one fixed-capped time step per tick,
//! and produces `GameSnapshot`s for the surrounding application. Completely
//! headless (no rendering or input dependency), enabling deterministic
//! testing from a seed.

pub mod camera;
pub mod engine;
pub mod player;
pub mod pool;
pub mod props;
pub mod setup;
pub mod systems;

pub use crawler_core as core;
pub use engine::{SimConfig, SimulationEngine};
