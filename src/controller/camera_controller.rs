use glam::Vec3;

use super::physics::EYE_HEIGHT;
use crate::model::Camera;

/// Player physical state. `pos` is the eye position; the collision box
/// hangs EYE_HEIGHT below it and is derived on demand, never stored.
pub struct PlayerState {
    pub pos: Vec3,
    pub vel: Vec3,
    pub on_ground: bool,
}

impl PlayerState {
    pub fn new(spawn_eye: Vec3) -> Self {
        Self {
            pos: spawn_eye,
            vel: Vec3::ZERO,
            on_ground: false,
        }
    }

    pub fn feet(&self) -> Vec3 {
        self.pos - Vec3::new(0.0, EYE_HEIGHT, 0.0)
    }
}

/// Applies mouse look to the camera and keeps it glued to the player.
pub struct CameraController {
    /// Degrees of rotation per mouse count.
    pub mouse_sensitivity: f32,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            mouse_sensitivity: 0.1,
        }
    }

    /// Apply a mouse delta: yaw turns right with +dx, pitch is clamped so
    /// the view can never flip over the poles.
    pub fn apply_look(&self, camera: &mut Camera, dx: f32, dy: f32) {
        camera.yaw += dx * self.mouse_sensitivity;
        camera.pitch = (camera.pitch + dy * self.mouse_sensitivity).clamp(-89.0, 89.0);
    }

    /// Move the camera eye onto the player eye after physics.
    pub fn sync_camera_from_player(&self, camera: &mut Camera, player: &PlayerState) {
        camera.eye = player.pos;
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}
