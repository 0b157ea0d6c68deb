//! Vertex data packing for GPU upload.
//!
//! Vertex data is a flat `f32` sequence of interleaved attributes. Packing
//! copies it into native byte order; the layout constants describe where
//! each attribute lives inside a vertex.

mod layout;
mod packer;

pub use layout::{PositionColorLayout, VertexAttribute, VertexLayout};
pub use packer::{PackedVertexBuffer, BYTES_PER_FLOAT};

/// Red, blue and green corners; each row is `x, y, z, r, g, b, a`.
#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; 21] = [
    -0.5, -0.25,        0.0,   1.0, 0.0, 0.0, 1.0,
     0.5, -0.25,        0.0,   0.0, 0.0, 1.0, 1.0,
     0.0,  0.559016994, 0.0,   0.0, 1.0, 0.0, 1.0,
];
