//! World/view/projection transforms.
//!
//! Per-frame matrices are pure functions of the frame counter and the camera
//! eye, so recomputing a frame twice yields the same result.

mod camera;
mod spin;
mod state;

pub use camera::{Camera, CameraCommand, CAMERA_STEP};
pub use spin::Spin;
pub use state::{Projection, TransformState};
