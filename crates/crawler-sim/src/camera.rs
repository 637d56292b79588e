//! Camera follow rig and world-to-screen projection.
//!
//! The rig trails the player at a fixed high-angle offset with exponential
//! smoothing and never changes orientation, so the view angle stays stable
//! while tracking. Screen shake is an additive offset computed by the
//! effects system and applied here each frame — the smoothed position never
//! absorbs jitter, so shake cannot drift the camera.

use glam::{Mat4, Vec2, Vec3};

use crawler_core::config::Viewport;
use crawler_core::constants::{
    CAMERA_FAR, CAMERA_FOLLOW_RATE, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_OFFSET,
};

/// A world point mapped to the viewport.
#[derive(Debug, Clone, Copy)]
pub struct ScreenPoint {
    /// Normalized coordinates, (0, 0) top-left to (1, 1) bottom-right.
    pub pos: Vec2,
    /// False when the point is behind the camera or outside the viewport.
    pub visible: bool,
}

/// Smoothed follow camera.
pub struct CameraRig {
    position: Vec3,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            position: CAMERA_OFFSET,
        }
    }

    /// Smoothed position, before shake.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move toward the fixed offset above the target.
    pub fn follow(&mut self, target: Vec3, dt: f32) {
        let goal = target + CAMERA_OFFSET;
        self.position += (goal - self.position) * (CAMERA_FOLLOW_RATE * dt);
    }

    /// Final eye position for this frame.
    pub fn eye(&self, shake_offset: Vec3) -> Vec3 {
        self.position + shake_offset
    }

    fn view_proj(&self, shake_offset: Vec3, viewport: &Viewport) -> Mat4 {
        // The rig looks back along its own offset; orientation is fixed.
        let look_dir = (-CAMERA_OFFSET).normalize();
        let view = Mat4::look_to_rh(self.eye(shake_offset), look_dir, Vec3::Y);
        let proj = Mat4::perspective_rh(
            CAMERA_FOV_DEG.to_radians(),
            viewport.aspect(),
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        proj * view
    }

    /// Project a world point to normalized screen coordinates.
    pub fn project(&self, world: Vec3, shake_offset: Vec3, viewport: &Viewport) -> ScreenPoint {
        let clip = self.view_proj(shake_offset, viewport) * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            // Behind the eye plane.
            return ScreenPoint {
                pos: Vec2::ZERO,
                visible: false,
            };
        }

        let ndc = clip.truncate() / clip.w;
        let pos = Vec2::new((ndc.x + 1.0) * 0.5, (1.0 - ndc.y) * 0.5);
        let on_screen =
            ndc.z < 1.0 && pos.x > 0.0 && pos.x < 1.0 && pos.y > 0.0 && pos.y < 1.0;
        ScreenPoint {
            pos,
            visible: on_screen,
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_converges_on_offset_target() {
        let mut rig = CameraRig::new();
        let player = Vec3::new(30.0, 0.0, -12.0);

        for _ in 0..120 {
            rig.follow(player, 1.0 / 60.0);
        }

        let goal = player + CAMERA_OFFSET;
        assert!(
            rig.position().distance(goal) < 0.01,
            "Camera should settle on the fixed offset, got {:?}",
            rig.position()
        );
    }

    #[test]
    fn looked_at_point_projects_to_center() {
        // The rig at rest looks from CAMERA_OFFSET back toward the origin.
        let rig = CameraRig::new();
        let point = rig.project(Vec3::ZERO, Vec3::ZERO, &Viewport::default());
        assert!(point.visible);
        assert!((point.pos.x - 0.5).abs() < 1e-4);
        assert!((point.pos.y - 0.5).abs() < 1e-4);
    }

    #[test]
    fn point_behind_camera_is_hidden() {
        let rig = CameraRig::new();
        // Continue past the eye along the view direction, well behind it.
        let behind = CAMERA_OFFSET * 2.0;
        let point = rig.project(behind, Vec3::ZERO, &Viewport::default());
        assert!(!point.visible);
    }

    #[test]
    fn far_off_axis_point_is_off_screen() {
        let rig = CameraRig::new();
        let point = rig.project(
            Vec3::new(10_000.0, 0.0, 0.0),
            Vec3::ZERO,
            &Viewport::default(),
        );
        assert!(!point.visible);
    }

    #[test]
    fn shake_offset_shifts_the_eye() {
        let rig = CameraRig::new();
        let shake = Vec3::new(0.25, -0.25, 0.1);
        assert_eq!(rig.eye(shake), rig.position() + shake);
        assert_eq!(rig.eye(Vec3::ZERO), rig.position());
    }
}
