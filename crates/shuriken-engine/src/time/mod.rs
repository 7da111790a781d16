//! Frame counting.
//!
//! Call `tick()` once per rendered frame; `FrameLimit` decides when a bounded
//! run is over.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameLimit};
