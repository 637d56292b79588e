//! Visual feedback: screen shake, particle bursts, floating damage text.
//!
//! Three independent concerns under one `update`. Shake is exposed as an
//! additive camera offset recomputed every frame; it is applied by the
//! camera step, never written into camera state, so concurrent systems can
//! not drift the view. Particles own per-instance tinted props that are
//! destroyed (not pooled) on expiry. Damage text lives in world space and
//! is projected to the screen each frame.

use glam::{Vec2, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crawler_core::config::Viewport;
use crawler_core::constants::*;
use crawler_core::enums::Appearance;

use crate::camera::CameraRig;
use crate::props::{PropKey, PropStore};

/// One burst particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Vec3,
    pub life: f32,
    pub color: u32,
    prop: PropKey,
}

/// One floating damage number, anchored in world space.
#[derive(Debug, Clone)]
pub struct FloatingText {
    pub world_pos: Vec3,
    pub velocity: Vec3,
    pub life: f32,
    pub amount: i32,
    pub is_crit: bool,
    pub screen: Vec2,
    pub opacity: f32,
    pub visible: bool,
}

pub struct EffectsSystem {
    shake_intensity: f32,
    shake_duration: f32,
    shake_offset: Vec3,
    particles: Vec<Particle>,
    texts: Vec<FloatingText>,
}

impl EffectsSystem {
    pub fn new() -> Self {
        Self {
            shake_intensity: 0.0,
            shake_duration: 0.0,
            shake_offset: Vec3::ZERO,
            particles: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        camera: &CameraRig,
        viewport: &Viewport,
        props: &mut PropStore,
        rng: &mut ChaCha8Rng,
    ) {
        self.update_shake(dt, rng);
        self.update_texts(dt, camera, viewport);
        self.update_particles(dt, props);
    }

    // --- Screen shake ---

    /// Start (or overwrite) a shake. Concurrent shakes do not blend; the
    /// latest call wins.
    pub fn shake(&mut self, intensity: f32, duration: f32) {
        self.shake_intensity = intensity;
        self.shake_duration = duration;
    }

    /// This frame's additive camera offset. Zero while no shake is running.
    pub fn shake_offset(&self) -> Vec3 {
        self.shake_offset
    }

    fn update_shake(&mut self, dt: f32, rng: &mut ChaCha8Rng) {
        if self.shake_duration > 0.0 {
            self.shake_duration -= dt;
            let i = self.shake_intensity;
            self.shake_offset = Vec3::new(
                (rng.gen::<f32>() - 0.5) * i,
                (rng.gen::<f32>() - 0.5) * i,
                (rng.gen::<f32>() - 0.5) * i,
            );
        } else {
            self.shake_offset = Vec3::ZERO;
        }
    }

    // --- Particle bursts ---

    /// Burst `count` tinted particles at `position` with a small horizontal
    /// jitter and an upward-biased random velocity.
    pub fn spawn_explosion(
        &mut self,
        position: Vec3,
        color: u32,
        count: u32,
        props: &mut PropStore,
        rng: &mut ChaCha8Rng,
    ) {
        for _ in 0..count {
            let key = props.create(Appearance::ParticleCube);
            let mut spawn_pos = position;
            spawn_pos.x += (rng.gen::<f32>() - 0.5) * PARTICLE_JITTER;
            spawn_pos.z += (rng.gen::<f32>() - 0.5) * PARTICLE_JITTER;

            let velocity = Vec3::new(
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
                rng.gen_range(PARTICLE_UP_MIN..PARTICLE_UP_MAX),
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD,
            );

            if let Some(prop) = props.get_mut(key) {
                prop.position = spawn_pos;
                prop.tint = Some(color);
            }

            self.particles.push(Particle {
                position: spawn_pos,
                velocity,
                rotation: Vec3::ZERO,
                life: PARTICLE_LIFETIME,
                color,
                prop: key,
            });
        }
    }

    fn update_particles(&mut self, dt: f32, props: &mut PropStore) {
        for particle in &mut self.particles {
            particle.life -= dt;
            particle.velocity.y -= PARTICLE_GRAVITY * dt;
            particle.position += particle.velocity * dt;
            // Spin proportional to velocity, tumbling faster when thrown harder.
            particle.rotation.x += particle.velocity.z * dt;
            particle.rotation.y += particle.velocity.x * dt;

            if let Some(prop) = props.get_mut(particle.prop) {
                prop.position = particle.position;
                prop.rotation = particle.rotation;
                prop.set_scale(particle.life.max(0.0));
            }
        }

        // Expired or grounded particles release their per-instance prop.
        self.particles.retain(|particle| {
            let dead = particle.life <= 0.0 || particle.position.y < 0.0;
            if dead {
                props.destroy(particle.prop);
            }
            !dead
        });
    }

    // --- Floating damage text ---

    /// Anchor a damage number at a world position with a random upward toss.
    pub fn show_damage(
        &mut self,
        position: Vec3,
        amount: i32,
        is_crit: bool,
        rng: &mut ChaCha8Rng,
    ) {
        let velocity = Vec3::new(
            (rng.gen::<f32>() - 0.5) * TEXT_DRIFT,
            TEXT_RISE_SPEED,
            (rng.gen::<f32>() - 0.5) * TEXT_DRIFT,
        );
        self.texts.push(FloatingText {
            world_pos: position,
            velocity,
            life: TEXT_LIFETIME,
            amount,
            is_crit,
            screen: Vec2::ZERO,
            opacity: 1.0,
            visible: false,
        });
    }

    fn update_texts(&mut self, dt: f32, camera: &CameraRig, viewport: &Viewport) {
        for text in &mut self.texts {
            text.life -= dt;
            text.world_pos += text.velocity * dt;
            text.velocity.y -= TEXT_GRAVITY * dt;
        }
        self.texts.retain(|text| text.life > 0.0);

        let shake = self.shake_offset;
        for text in &mut self.texts {
            if text.life < TEXT_FADE_START {
                text.opacity = (text.life * 2.0).max(0.0);
            }
            let point = camera.project(text.world_pos, shake, viewport);
            text.screen = point.pos;
            text.visible = point.visible;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn texts(&self) -> &[FloatingText] {
        &self.texts
    }

    /// Whether a shake is still running.
    pub fn is_shaking(&self) -> bool {
        self.shake_duration > 0.0
    }
}

impl Default for EffectsSystem {
    fn default() -> Self {
        Self::new()
    }
}
