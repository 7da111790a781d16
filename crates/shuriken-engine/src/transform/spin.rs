use std::f64::consts::TAU;

use glam::{Mat4, Vec3};

/// Rotation of the world matrix driven by the frame counter.
///
/// `angle = frame / frames_per_radian`, wrapped into `[0, 2π)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spin {
    pub axis: Vec3,
    pub frames_per_radian: f32,
}

impl Spin {
    pub const fn new(axis: Vec3, frames_per_radian: f32) -> Self {
        Self { axis, frames_per_radian }
    }

    /// Rotation angle in radians for `frame`.
    ///
    /// Computed in f64 so large counters keep their precision before wrapping.
    pub fn angle(&self, frame: u64) -> f32 {
        (frame as f64 / f64::from(self.frames_per_radian)).rem_euclid(TAU) as f32
    }

    /// World matrix for `frame`: identity rotated about `axis`.
    ///
    /// A zero axis leaves the identity untouched.
    pub fn world(&self, frame: u64) -> Mat4 {
        let axis = self.axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return Mat4::IDENTITY;
        }
        Mat4::from_axis_angle(axis, self.angle(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_zero_is_identity() {
        let spin = Spin::new(Vec3::Y, 10.0);
        assert_eq!(spin.angle(0), 0.0);
        assert!(spin.world(0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn angle_is_frame_over_divisor() {
        let spin = Spin::new(Vec3::Z, 30.0);
        assert!((spin.angle(15) - 0.5).abs() < 1e-6);
        assert!((spin.angle(45) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn angle_wraps_below_full_turn() {
        let spin = Spin::new(Vec3::Y, 10.0);
        for frame in [63, 64, 1_000, 1 << 40, u64::MAX] {
            let a = spin.angle(frame);
            assert!((0.0..std::f32::consts::TAU).contains(&a), "frame {frame} -> {a}");
        }
        // 63 frames / 10 = 6.3 rad, one wrap.
        assert!((spin.angle(63) - (6.3 - std::f32::consts::TAU)).abs() < 1e-4);
    }

    #[test]
    fn world_rotates_about_axis() {
        let spin = Spin::new(Vec3::Y, 10.0);
        let m = Mat4::from_axis_angle(Vec3::Y, spin.angle(5));
        assert!(spin.world(5).abs_diff_eq(m, 1e-6));
        // Points on the axis are fixed.
        let p = spin.world(5).transform_point3(Vec3::new(0.0, 2.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-6));
    }

    #[test]
    fn zero_axis_keeps_identity() {
        let spin = Spin::new(Vec3::ZERO, 30.0);
        assert_eq!(spin.world(100), Mat4::IDENTITY);
    }
}
