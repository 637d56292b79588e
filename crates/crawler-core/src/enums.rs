//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for `StartGame`.
    #[default]
    Menu,
    /// Match running.
    Active,
    /// Match frozen; `Resume` returns to `Active`.
    Paused,
    /// Every enemy destroyed. Effects keep animating; input still moves
    /// the player, mirroring the short celebration window before the
    /// surrounding application switches screens.
    Victory,
    /// Player hit points reached zero.
    Defeat,
}

impl GamePhase {
    /// Whether the world advances at all this frame.
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Active | GamePhase::Victory | GamePhase::Defeat)
    }

    /// Whether the match has reached an end screen.
    pub fn is_ended(&self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::Defeat)
    }
}

/// How a prop instance looks. A small closed set of appearance providers:
/// configured templates, plus built-in primitives for the template-less
/// fallback and the shared projectile/particle shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Appearance {
    /// Instance of a configured visual template.
    Template { index: usize },
    /// Red box used for enemies when no templates are configured.
    FallbackBox,
    /// Cyan orb used for projectiles.
    ProjectileOrb,
    /// Small tinted cube used for burst particles.
    ParticleCube,
}
