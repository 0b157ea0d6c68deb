//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! [`RenderTarget`] handed out once per frame.
//!
//! Convention:
//! - vertex positions are world units; the vertex shader applies an MVP uniform
//! - matrices are uploaded column-major with wgpu depth range `[0, 1]`

mod ctx;
pub mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangle::TriangleRenderer;
