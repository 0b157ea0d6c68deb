//! Orthographic projection for the render surface.
//!
//! The aspect correction is always applied to the longer axis, so the shorter
//! axis spans exactly `[-1, 1]` in world units in either orientation.
//!
//! Matrices are built in the OpenGL clip-space convention (depth in `[-1, 1]`).
//! Use [`ProjectionMatrix::to_wgpu_clip`] before uploading to a wgpu pipeline.

mod orientation;
mod ortho;

pub use orientation::{Orientation, OrientationMode};
pub use ortho::{build_orthographic, ortho_bounds, OrthoBounds, ProjectionMatrix};
