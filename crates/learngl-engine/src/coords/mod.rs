//! Surface geometry and color values shared by the runtime and the scene.
//!
//! Sizes are physical pixels as reported by the window system. World space is
//! the projection's `[-1, 1]` box on the shorter axis.

mod color;
mod viewport;

pub use color::ColorRgba;
pub use viewport::Viewport;
