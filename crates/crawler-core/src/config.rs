//! Arena configuration handed in by the surrounding application.
//!
//! The asset layer (excluded from this core) loads and measures 3D models;
//! the core only needs their names and native bounding boxes. Parse or
//! validation failure is a failed initialization — the caller may fall back
//! to an empty template list, in which case enemies use the fallback box.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::NARROW_VIEWPORT_PX;

/// Errors produced while loading an [`ArenaConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("template `{0}` has non-positive or non-finite extents")]
    BadTemplate(String),
}

/// A renderable enemy model as measured by the asset layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualTemplate {
    pub name: String,
    /// Native bounding-box extents (x, y, z) before any normalization.
    pub size: [f32; 3],
    /// Native minimum Y — how far the lowest point sits below the
    /// model's own origin.
    pub min_y: f32,
}

impl VisualTemplate {
    fn is_valid(&self) -> bool {
        self.size.iter().all(|d| d.is_finite() && *d > 0.0) && self.min_y.is_finite()
    }
}

/// Host viewport in pixels; drives the projection aspect ratio and the
/// mobile aim heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Narrow viewports aim along the movement direction instead of the
    /// pointer target.
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_VIEWPORT_PX
    }
}

/// Complete arena configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Enemy model templates; empty means every enemy uses the fallback box.
    #[serde(default)]
    pub enemy_templates: Vec<VisualTemplate>,
    #[serde(default)]
    pub viewport: Viewport,
}

impl ArenaConfig {
    /// Parse and validate a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for template in &self.enemy_templates {
            if !template.is_valid() {
                return Err(ConfigError::BadTemplate(template.name.clone()));
            }
        }
        Ok(())
    }
}
