use glam::{Mat4, Vec3};

use crate::input::Key;

/// Distance the eye moves per camera command.
pub const CAMERA_STEP: f32 = 0.5;

/// Discrete camera translation requested by input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CameraCommand {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
}

impl CameraCommand {
    /// `W`/`S` move along z, `A`/`D` along x.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::W => Some(CameraCommand::Forward),
            Key::S => Some(CameraCommand::Back),
            Key::A => Some(CameraCommand::StrafeLeft),
            Key::D => Some(CameraCommand::StrafeRight),
            _ => None,
        }
    }
}

/// Eye position looking at a fixed target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Camera at `eye` looking at the origin with +Y up.
    pub const fn looking_at_origin(eye: Vec3) -> Self {
        Self { eye, target: Vec3::ZERO, up: Vec3::Y }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Translates the eye by one fixed step. The target does not move.
    pub fn apply(&mut self, cmd: CameraCommand) {
        match cmd {
            CameraCommand::Forward => self.eye.z -= CAMERA_STEP,
            CameraCommand::Back => self.eye.z += CAMERA_STEP,
            CameraCommand::StrafeLeft => self.eye.x -= CAMERA_STEP,
            CameraCommand::StrafeRight => self.eye.x += CAMERA_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_decreases_eye_z_by_one_step() {
        let mut cam = Camera::looking_at_origin(Vec3::new(0.0, 0.0, 5.0));
        cam.apply(CameraCommand::Forward);
        assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 4.5));
    }

    #[test]
    fn strafe_and_back_move_by_one_step() {
        let mut cam = Camera::looking_at_origin(Vec3::new(0.0, 0.0, 5.0));
        cam.apply(CameraCommand::StrafeLeft);
        cam.apply(CameraCommand::Back);
        assert_eq!(cam.eye, Vec3::new(-0.5, 0.0, 5.5));
        cam.apply(CameraCommand::StrafeRight);
        cam.apply(CameraCommand::StrafeRight);
        assert_eq!(cam.eye.x, 0.5);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn wasd_keys_map_to_commands() {
        assert_eq!(CameraCommand::from_key(Key::W), Some(CameraCommand::Forward));
        assert_eq!(CameraCommand::from_key(Key::A), Some(CameraCommand::StrafeLeft));
        assert_eq!(CameraCommand::from_key(Key::S), Some(CameraCommand::Back));
        assert_eq!(CameraCommand::from_key(Key::D), Some(CameraCommand::StrafeRight));
        assert_eq!(CameraCommand::from_key(Key::Escape), None);
    }

    #[test]
    fn view_matrix_maps_target_onto_negative_z() {
        let cam = Camera::looking_at_origin(Vec3::new(0.0, 0.0, 3.0));
        let p = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), 1e-6));
    }
}
