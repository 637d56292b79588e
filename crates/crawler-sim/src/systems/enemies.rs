//! Enemy slots: spawning, steering, melee attacks, projectile collisions.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crawler_core::config::VisualTemplate;
use crawler_core::constants::*;
use crawler_core::enums::Appearance;
use crawler_core::events::FxEvent;
use crawler_core::types::{horizontal_dist_sq, yaw_toward};

use crate::props::{BodyBounds, PropKey, PropStore};
use crate::systems::effects::EffectsSystem;
use crate::systems::projectiles::ProjectileSystem;

/// One enemy slot. Slots are created once at construction and recycled:
/// `active == false` means the slot is vacant, holds no visual, and its
/// remaining fields are meaningless.
#[derive(Debug, Clone)]
pub struct EnemySlot {
    /// Slot index; doubles as the enemy id while it is alive.
    pub id: usize,
    pub active: bool,
    pub position: Vec3,
    pub speed: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub attack_cooldown: f32,
    pub visual: Option<PropKey>,
    /// Lazily cached collision cylinder. `None` means stale: recomputed
    /// from the visual on the next collision pass. Cleared whenever the
    /// visual changes.
    pub bounds: Option<BodyBounds>,
}

impl EnemySlot {
    fn vacant(id: usize) -> Self {
        Self {
            id,
            active: false,
            position: Vec3::ZERO,
            speed: 0.0,
            hp: ENEMY_MAX_HP,
            max_hp: ENEMY_MAX_HP,
            attack_cooldown: 0.0,
            visual: None,
            bounds: None,
        }
    }
}

/// Fixed-capacity enemy population.
pub struct EnemySystem {
    slots: Vec<EnemySlot>,
    active_count: usize,
    spawned_total: u32,
    killed_total: u32,
}

impl EnemySystem {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(EnemySlot::vacant).collect(),
            active_count: 0,
            spawned_total: 0,
            killed_total: 0,
        }
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn spawned_total(&self) -> u32 {
        self.spawned_total
    }

    pub fn killed_total(&self) -> u32 {
        self.killed_total
    }

    pub fn slots(&self) -> &[EnemySlot] {
        &self.slots
    }

    /// Activate the first vacant slot at `position`. A full system refuses
    /// silently — the capacity ceiling is a soft cap, not an error.
    pub fn spawn(
        &mut self,
        position: Vec3,
        props: &mut PropStore,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<FxEvent>,
    ) {
        let Some(index) = self.slots.iter().position(|slot| !slot.active) else {
            return;
        };

        // A vacant slot can still hold last life's visual; drop it before
        // generating the new one.
        if let Some(stale) = self.slots[index].visual.take() {
            props.destroy(stale);
        }
        let key = create_enemy_visual(props, rng);
        props.set_transform(key, position, 0.0);

        let slot = &mut self.slots[index];
        slot.active = true;
        slot.position = position;
        slot.speed = rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX);
        slot.hp = slot.max_hp;
        slot.attack_cooldown = 0.0;
        slot.bounds = None;
        slot.visual = Some(key);

        self.active_count += 1;
        self.spawned_total += 1;
        events.push(FxEvent::EnemySpawned { id: index });
        log::debug!("enemy {index} spawned at {position}");
    }

    /// Steering and melee for every active enemy.
    ///
    /// Enemies seek the player, get pushed back when inside the personal
    /// radius, and repel each other with inverse-square separation. The
    /// pass is sequential and in-place: an enemy reads the already-updated
    /// positions of lower-indexed neighbors, which keeps the pairwise scan
    /// a single O(n²) loop.
    pub fn update(
        &mut self,
        dt: f32,
        player_pos: Vec3,
        props: &mut PropStore,
        mut on_attack: impl FnMut(i32),
    ) {
        if self.active_count == 0 {
            return;
        }

        for i in 0..self.slots.len() {
            if !self.slots[i].active {
                continue;
            }

            if self.slots[i].attack_cooldown > 0.0 {
                self.slots[i].attack_cooldown -= dt;
            }

            let pos = self.slots[i].position;
            let dist_to_player = pos.distance(player_pos);

            if dist_to_player < ATTACK_RANGE && self.slots[i].attack_cooldown <= 0.0 {
                on_attack(ATTACK_DAMAGE);
                self.slots[i].attack_cooldown = ATTACK_INTERVAL;
            }

            let mut dir = (player_pos - pos).normalize_or_zero();

            if dist_to_player < MIN_PLAYER_DIST {
                let overlap = (MIN_PLAYER_DIST - dist_to_player) * PLAYER_REPULSION_GAIN;
                dir += (pos - player_pos).normalize_or_zero() * overlap;
            }

            let mut separation = Vec3::ZERO;
            let mut contributors = 0u32;
            for j in 0..self.slots.len() {
                if j == i || !self.slots[j].active {
                    continue;
                }
                let offset = pos - self.slots[j].position;
                let dist_sq = offset.length_squared();
                if dist_sq < SEPARATION_RADIUS * SEPARATION_RADIUS {
                    let dist = dist_sq.sqrt();
                    if dist > SEPARATION_EPSILON {
                        // Inverse-square repulsion: unit direction / distance.
                        separation += offset / (dist * dist);
                        contributors += 1;
                    }
                }
            }
            if contributors > 0 {
                separation /= contributors as f32;
                dir = (dir + separation * SEPARATION_FORCE).normalize_or_zero();
            }

            let slot = &mut self.slots[i];
            slot.position += dir * slot.speed * dt;

            if let Some(key) = slot.visual {
                let yaw = yaw_toward(slot.position, player_pos);
                props.set_transform(key, slot.position, yaw);
            }
        }
    }

    /// Cylinder collision between every active enemy and the projectiles
    /// in flight. Enemies are scanned in slot order, projectiles newest
    /// first; a projectile is consumed by its first hit and an enemy takes
    /// at most one hit per frame.
    pub fn check_collisions(
        &mut self,
        projectiles: &mut ProjectileSystem,
        effects: &mut EffectsSystem,
        props: &mut PropStore,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<FxEvent>,
    ) {
        for i in 0..self.slots.len() {
            if !self.slots[i].active {
                continue;
            }

            let bounds = match self.slots[i].bounds {
                Some(bounds) => bounds,
                None => {
                    let bounds = self.slots[i]
                        .visual
                        .and_then(|key| props.bounds(key))
                        .unwrap_or(BodyBounds {
                            radius: DEFAULT_BODY_RADIUS,
                            height: DEFAULT_BODY_HEIGHT,
                        });
                    self.slots[i].bounds = Some(bounds);
                    bounds
                }
            };
            let padded_radius = bounds.radius + HIT_PADDING;
            let enemy_pos = self.slots[i].position;

            for index in (0..projectiles.active_len()).rev() {
                let slot = projectiles.active_slot(index);
                let projectile = projectiles.get(slot);

                let combined = padded_radius + projectile.radius;
                if horizontal_dist_sq(enemy_pos, projectile.position) >= combined * combined {
                    continue;
                }
                let y = projectile.position.y;
                let bottom = enemy_pos.y - VERTICAL_HIT_MARGIN;
                let top = enemy_pos.y + bounds.height + VERTICAL_HIT_MARGIN;
                if y < bottom || y > top {
                    continue;
                }

                let is_crit = rng.gen_bool(CRIT_CHANCE);
                let damage = if is_crit {
                    BASE_DAMAGE * CRIT_MULTIPLIER
                } else {
                    BASE_DAMAGE
                };
                self.slots[i].hp -= damage;

                effects.show_damage(enemy_pos, damage, is_crit, rng);
                events.push(FxEvent::DamageNumber {
                    position: enemy_pos,
                    amount: damage,
                    is_crit,
                });

                projectiles.despawn(slot, props);

                if self.slots[i].hp <= 0 {
                    self.kill(i, effects, props, rng, events);
                }

                // This projectile is spent; next enemy.
                break;
            }
        }
    }

    fn kill(
        &mut self,
        index: usize,
        effects: &mut EffectsSystem,
        props: &mut PropStore,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<FxEvent>,
    ) {
        let slot = &mut self.slots[index];
        slot.active = false;
        let position = slot.position;
        if let Some(key) = slot.visual.take() {
            props.destroy(key);
        }
        self.active_count -= 1;
        self.killed_total += 1;

        effects.spawn_explosion(position, ENEMY_DEATH_COLOR, EXPLOSION_PARTICLE_COUNT, props, rng);
        events.push(FxEvent::Explosion {
            position,
            color: ENEMY_DEATH_COLOR,
            count: EXPLOSION_PARTICLE_COUNT,
        });
        events.push(FxEvent::EnemyKilled { id: index });
        log::debug!("enemy {index} destroyed, {} remaining", self.active_count);
    }

    /// Deactivate every enemy without deaths, effects, or score changes.
    #[cfg(test)]
    pub fn clear_all(&mut self, props: &mut PropStore) {
        for slot in &mut self.slots {
            if slot.active {
                slot.active = false;
                if let Some(key) = slot.visual.take() {
                    props.destroy(key);
                }
            }
        }
        self.active_count = 0;
    }

    /// Hot-swap the template set. Every active enemy gets a fresh visual
    /// from the new set in the same call, keeping its position; cached
    /// collision bounds go stale and are recomputed lazily.
    pub fn update_templates(
        &mut self,
        templates: Vec<VisualTemplate>,
        props: &mut PropStore,
        rng: &mut ChaCha8Rng,
    ) {
        props.set_templates(templates);

        for i in 0..self.slots.len() {
            if !self.slots[i].active {
                continue;
            }
            if let Some(old) = self.slots[i].visual.take() {
                props.destroy(old);
            }
            let key = create_enemy_visual(props, rng);
            props.set_transform(key, self.slots[i].position, 0.0);
            self.slots[i].visual = Some(key);
            self.slots[i].bounds = None;
        }
    }
}

/// Build one enemy visual: a random configured template normalized to the
/// shared enemy height and grounded, or the fallback box when no templates
/// are configured.
fn create_enemy_visual(props: &mut PropStore, rng: &mut ChaCha8Rng) -> PropKey {
    let appearance = if props.template_count() == 0 {
        Appearance::FallbackBox
    } else {
        Appearance::Template {
            index: rng.gen_range(0..props.template_count()),
        }
    };
    let key = props.create(appearance);
    if matches!(appearance, Appearance::Template { .. }) {
        if let Some(prop) = props.get_mut(key) {
            prop.normalize_height(ENEMY_TARGET_HEIGHT);
            prop.reground();
        }
    }
    key
}
