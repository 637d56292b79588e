//! Software visual-instance store — the render provider surface.
//!
//! The simulation never talks to a real renderer; it owns prop instances
//! (template clones and primitives) with enough geometry to do the math the
//! game rules need: height normalization, grounding, and collision bounds.
//! A renderer mirrors this store through the snapshot.
//!
//! Handles are generational slotmap keys, so a key kept across a destroy or
//! a template hot-swap dangles harmlessly: every operation on a stale key
//! is a no-op.

use glam::Vec3;
use slotmap::{new_key_type, SlotMap};

use crawler_core::config::VisualTemplate;
use crawler_core::constants::{
    DEGENERATE_HEIGHT_EPS, FALLBACK_BOX_SIZE, PARTICLE_SIZE, PROJECTILE_ORB_SIZE,
};
use crawler_core::enums::Appearance;

new_key_type! {
    /// Generational handle to a prop instance.
    pub struct PropKey;
}

/// Collision cylinder derived from a prop's scaled geometry: radius is half
/// the larger horizontal extent, height is the vertical extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyBounds {
    pub radius: f32,
    pub height: f32,
}

/// One visual instance.
#[derive(Debug, Clone)]
pub struct Prop {
    pub appearance: Appearance,
    /// Native bounding-box extents before scaling.
    size: Vec3,
    /// Native minimum Y relative to the prop origin.
    min_y: f32,
    scale: f32,
    ground_offset: f32,
    pub position: Vec3,
    /// Euler rotation; yaw is `rotation.y`.
    pub rotation: Vec3,
    /// 0xRRGGBB tint for per-instance colored primitives.
    pub tint: Option<u32>,
    pub visible: bool,
}

impl Prop {
    fn new(appearance: Appearance, size: Vec3, min_y: f32) -> Self {
        Self {
            appearance,
            size,
            min_y,
            scale: 1.0,
            ground_offset: 0.0,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            tint: None,
            visible: true,
        }
    }

    /// Scale so the world height equals `target`. Degenerate (near-zero
    /// height) geometry is left untouched rather than divided by zero.
    /// Idempotent: a second call with the same target changes nothing.
    pub fn normalize_height(&mut self, target: f32) {
        let height = self.size.y * self.scale;
        if height > DEGENERATE_HEIGHT_EPS {
            self.scale *= target / height;
        }
    }

    /// Offset so the lowest point of the scaled geometry sits at local
    /// y = 0. Idempotent; re-run after any scale change.
    pub fn reground(&mut self) {
        self.ground_offset = -self.min_y * self.scale;
    }

    /// Current world height of the scaled geometry.
    pub fn height(&self) -> f32 {
        self.size.y * self.scale
    }

    /// Lowest world-space point, given the current position and grounding.
    pub fn world_min_y(&self) -> f32 {
        self.position.y + self.min_y * self.scale + self.ground_offset
    }

    pub fn bounds(&self) -> BodyBounds {
        BodyBounds {
            radius: self.size.x.max(self.size.z) * self.scale * 0.5,
            height: self.size.y * self.scale,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Absolute uniform scale (particles shrink with remaining life).
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

/// All live prop instances plus the configured template set.
pub struct PropStore {
    props: SlotMap<PropKey, Prop>,
    templates: Vec<VisualTemplate>,
}

impl PropStore {
    pub fn new(templates: Vec<VisualTemplate>) -> Self {
        Self {
            props: SlotMap::with_key(),
            templates,
        }
    }

    /// Replace the template set. Existing props keep the geometry they were
    /// created with; callers regenerate the visuals they care about.
    pub fn set_templates(&mut self, templates: Vec<VisualTemplate>) {
        self.templates = templates;
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn templates(&self) -> &[VisualTemplate] {
        &self.templates
    }

    /// Instantiate a prop. Template geometry comes from the configured set;
    /// primitives carry their built-in extents.
    pub fn create(&mut self, appearance: Appearance) -> PropKey {
        let (size, min_y) = match appearance {
            Appearance::Template { index } => {
                let template = &self.templates[index];
                (Vec3::from_array(template.size), template.min_y)
            }
            // Primitives are centered on their origin.
            Appearance::FallbackBox => (FALLBACK_BOX_SIZE, -FALLBACK_BOX_SIZE.y * 0.5),
            Appearance::ProjectileOrb => (
                Vec3::splat(PROJECTILE_ORB_SIZE),
                -PROJECTILE_ORB_SIZE * 0.5,
            ),
            Appearance::ParticleCube => (Vec3::splat(PARTICLE_SIZE), -PARTICLE_SIZE * 0.5),
        };
        self.props.insert(Prop::new(appearance, size, min_y))
    }

    /// Remove a prop and free whatever per-instance resources it carries.
    /// Stale keys are ignored.
    pub fn destroy(&mut self, key: PropKey) {
        self.props.remove(key);
    }

    pub fn get(&self, key: PropKey) -> Option<&Prop> {
        self.props.get(key)
    }

    pub fn get_mut(&mut self, key: PropKey) -> Option<&mut Prop> {
        self.props.get_mut(key)
    }

    pub fn contains(&self, key: PropKey) -> bool {
        self.props.contains_key(key)
    }

    /// Place a prop and point it along `yaw`. No-op on a stale key.
    pub fn set_transform(&mut self, key: PropKey, position: Vec3, yaw: f32) {
        if let Some(prop) = self.props.get_mut(key) {
            prop.position = position;
            prop.rotation.y = yaw;
        }
    }

    pub fn set_visible(&mut self, key: PropKey, visible: bool) {
        if let Some(prop) = self.props.get_mut(key) {
            prop.visible = visible;
        }
    }

    pub fn bounds(&self, key: PropKey) -> Option<BodyBounds> {
        self.props.get(key).map(Prop::bounds)
    }

    /// Number of live props.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}
