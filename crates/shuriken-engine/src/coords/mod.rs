//! Surface-size types shared by the device layer and transforms.

mod viewport;

pub use viewport::Viewport;
