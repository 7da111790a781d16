use glam::Mat4;

use crate::coords::Viewport;

use super::{Camera, Spin};

/// Perspective projection parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    pub fov_y_radians: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_radians: 45f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Projection {
    /// Right-handed perspective matrix with wgpu's `[0, 1]` depth range.
    pub fn matrix(&self, viewport: Viewport) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_radians, viewport.aspect(), self.near, self.far)
    }
}

/// The three transform matrices pushed to the shader each frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformState {
    pub world: Mat4,
    pub view: Mat4,
    pub proj: Mat4,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            world: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
        }
    }
}

impl TransformState {
    /// Initial state: identity world, fixed view and projection.
    pub fn new(view: Mat4, proj: Mat4) -> Self {
        Self { world: Mat4::IDENTITY, view, proj }
    }

    /// Recomputes the per-frame matrices.
    ///
    /// `world` is always rebuilt from the identity (nothing accumulates);
    /// `view` is rebuilt only when a moving camera is supplied.
    pub fn update(&mut self, spin: Option<&Spin>, frame: u64, camera: Option<&Camera>) {
        if let Some(spin) = spin {
            self.world = spin.world(frame);
        }
        if let Some(camera) = camera {
            self.view = camera.view_matrix();
        }
    }
}
