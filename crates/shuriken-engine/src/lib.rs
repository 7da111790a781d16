//! Shuriken engine crate.
//!
//! Owns the platform + GPU runtime pieces the demos share: window and frame
//! loop, shader compile/link/validate, vertex geometry upload and per-frame
//! transforms.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod shader;
pub mod geometry;
pub mod transform;
