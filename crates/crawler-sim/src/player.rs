//! Player state: movement, aiming, fire cooldown, hit points.

use glam::{Vec2, Vec3};

use crawler_core::constants::{
    MUZZLE_HEIGHT, MUZZLE_OFFSET, PLAYER_MAX_HP, PLAYER_MAX_MP, PLAYER_SPEED,
};
use crawler_core::types::{yaw_forward, yaw_toward};

/// The player entity. Movement is direct velocity on the ground plane;
/// facing is a yaw angle driven by the aim target.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: Vec3,
    pub yaw: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub mp: i32,
    pub max_mp: i32,
    pub fire_cooldown: f32,
    /// Hidden after the defeat explosion.
    pub visible: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            mp: PLAYER_MAX_MP,
            max_mp: PLAYER_MAX_MP,
            fire_cooldown: 0.0,
            visible: true,
        }
    }

    /// Apply the movement intent for one frame.
    pub fn translate(&mut self, move_dir: Vec2, dt: f32) {
        self.position.x += move_dir.x * PLAYER_SPEED * dt;
        self.position.z += move_dir.y * PLAYER_SPEED * dt;
    }

    /// Turn to face a world point, horizontal look only.
    pub fn face_toward(&mut self, target: Vec3) {
        self.yaw = yaw_toward(self.position, target);
    }

    /// Horizontal forward direction.
    pub fn forward(&self) -> Vec3 {
        let dir = yaw_forward(self.yaw);
        Vec3::new(dir.x, 0.0, dir.y)
    }

    /// Projectile launch point: one unit ahead, at waist height.
    pub fn muzzle(&self) -> Vec3 {
        let mut pos = self.position + self.forward() * MUZZLE_OFFSET;
        pos.y = MUZZLE_HEIGHT;
        pos
    }

    /// Apply damage, clamping at zero. Returns false (and changes nothing)
    /// once the player is already down.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        if self.hp <= 0 {
            return false;
        }
        self.hp = (self.hp - amount).max(0);
        true
    }

    /// Restore hit points, clamped to the maximum. Returns false once the
    /// player is down — healing does not revive.
    pub fn heal(&mut self, amount: i32) -> bool {
        if self.hp <= 0 {
            return false;
        }
        self.hp = (self.hp + amount).min(self.max_hp);
        true
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut player = PlayerState::new();
        assert!(player.apply_damage(250));
        assert_eq!(player.hp, 0, "Player hp must clamp at zero, never negative");
    }

    #[test]
    fn damage_after_death_is_a_no_op() {
        let mut player = PlayerState::new();
        player.apply_damage(player.max_hp);
        assert!(!player.apply_damage(10));
        assert_eq!(player.hp, 0);
    }

    #[test]
    fn heal_clamps_at_max() {
        let mut player = PlayerState::new();
        player.apply_damage(30);
        assert!(player.heal(100));
        assert_eq!(player.hp, player.max_hp);
    }

    #[test]
    fn heal_does_not_revive() {
        let mut player = PlayerState::new();
        player.apply_damage(player.max_hp);
        assert!(!player.heal(50));
        assert_eq!(player.hp, 0);
    }

    #[test]
    fn muzzle_sits_ahead_at_waist_height() {
        let mut player = PlayerState::new();
        player.face_toward(Vec3::new(0.0, 0.0, 10.0));
        let muzzle = player.muzzle();
        assert!((muzzle.z - 1.0).abs() < 1e-5);
        assert!(muzzle.x.abs() < 1e-5);
        assert!((muzzle.y - 1.0).abs() < 1e-5);
    }
}
