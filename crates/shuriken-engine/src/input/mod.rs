//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into `InputEvent`s.

mod frame;
mod types;

pub use frame::InputFrame;
pub use types::{InputEvent, Key, KeyState, PointerMoveEvent};
