//! Player commands and per-frame input.
//!
//! Commands are queued and processed at the next tick boundary; frame input
//! is sampled fresh every tick by the surrounding application's input layer.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::VisualTemplate;

/// Discrete player actions, processed at tick boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a match from the menu: spawn the opening wave and go Active.
    StartGame,
    /// Pause the match. Ignored on end screens.
    Pause,
    /// Resume a paused match.
    Resume,
    /// Tear the world down and start a fresh match with the same
    /// configuration and seed.
    Restart,
    /// Hot-swap the enemy template set. Every active enemy gets a new
    /// visual from the new set, keeping its position.
    SwapEnemyTemplates { templates: Vec<VisualTemplate> },
    /// Host window resized.
    SetViewport { width: f32, height: f32 },
}

/// Continuous input sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Movement intent on the ground plane; unit length or zero.
    pub move_dir: Vec2,
    /// Whether the fire control is held.
    pub fire: bool,
    /// Ground point under the pointer, if the pointer hits the arena.
    pub aim: Option<Vec3>,
}
