//! Projectile lifecycle: pooled spawn, straight-line flight, timed expiry.

use glam::Vec3;

use crawler_core::constants::{
    PROJECTILE_LIFETIME, PROJECTILE_POOL_SIZE, PROJECTILE_RADIUS, PROJECTILE_SPEED,
};
use crawler_core::enums::Appearance;

use crate::pool::{PoolSlot, ResourcePool};
use crate::props::{PropKey, PropStore};

/// One projectile. Lives in the pool for its whole lifetime; the active
/// list below decides whether it is in flight.
#[derive(Debug, Clone, Default)]
pub struct Projectile {
    pub position: Vec3,
    pub velocity: Vec3,
    pub life: f32,
    pub radius: f32,
    /// Created lazily the first time the slot is activated, then reused
    /// across the slot's whole pooled lifetime.
    visual: Option<PropKey>,
}

/// Owns the projectile pool and the list of slots currently in flight.
/// A slot is on the active list exactly when the pool marks it active.
pub struct ProjectileSystem {
    pool: ResourcePool<Projectile>,
    active: Vec<PoolSlot>,
}

impl ProjectileSystem {
    pub fn new() -> Self {
        Self {
            pool: ResourcePool::prewarmed("projectile", PROJECTILE_POOL_SIZE),
            active: Vec::new(),
        }
    }

    /// Launch one projectile. Never fails: the pool grows under starvation.
    pub fn spawn(&mut self, position: Vec3, direction: Vec3, props: &mut PropStore) {
        let slot = self.pool.acquire();
        let projectile = self.pool.get_mut(slot);
        projectile.position = position;
        projectile.velocity = direction.normalize_or(Vec3::Z) * PROJECTILE_SPEED;
        projectile.life = PROJECTILE_LIFETIME;
        projectile.radius = PROJECTILE_RADIUS;

        let key = match projectile.visual {
            Some(key) if props.contains(key) => key,
            _ => {
                let key = props.create(Appearance::ProjectileOrb);
                projectile.visual = Some(key);
                key
            }
        };
        props.set_visible(key, true);
        props.set_transform(key, position, 0.0);

        self.active.push(slot);
    }

    /// Advance all projectiles and expire the ones whose life ran out.
    /// Expired slots are marked first and compacted afterwards, so the scan
    /// can never skip or double-visit an entry.
    pub fn update(&mut self, dt: f32, props: &mut PropStore) {
        for index in 0..self.active.len() {
            let slot = self.active[index];
            let projectile = self.pool.get_mut(slot);
            projectile.position += projectile.velocity * dt;
            projectile.life -= dt;

            if projectile.life <= 0.0 {
                let key = projectile.visual;
                if let Some(key) = key {
                    props.set_visible(key, false);
                }
                self.pool.release(slot);
            } else {
                let position = projectile.position;
                if let Some(key) = projectile.visual {
                    props.set_transform(key, position, 0.0);
                }
            }
        }

        let pool = &self.pool;
        self.active.retain(|&slot| pool.is_active(slot));
    }

    /// Return a projectile to the pool and drop it from the active list.
    /// Safe to call with a slot that is no longer active.
    pub fn despawn(&mut self, slot: PoolSlot, props: &mut PropStore) {
        if let Some(key) = self.pool.get(slot).visual {
            props.set_visible(key, false);
        }
        self.pool.release(slot);
        self.active.retain(|&s| s != slot);
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Slot at a position in the active list (newest entries last).
    pub fn active_slot(&self, index: usize) -> PoolSlot {
        self.active[index]
    }

    pub fn get(&self, slot: PoolSlot) -> &Projectile {
        self.pool.get(slot)
    }

    /// Total pool size, for starvation checks.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Projectile> {
        self.active.iter().map(|&slot| self.pool.get(slot))
    }
}

impl Default for ProjectileSystem {
    fn default() -> Self {
        Self::new()
    }
}
