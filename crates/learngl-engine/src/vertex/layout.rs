use super::BYTES_PER_FLOAT;

/// One interleaved `f32` attribute, described in floats.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    /// Shader location.
    pub location: u32,
    /// Offset of the first component within a vertex, in floats.
    pub offset: usize,
    /// Component count (1..=4).
    pub size: usize,
}

impl VertexAttribute {
    #[inline]
    pub const fn byte_offset(&self) -> usize {
        self.offset * BYTES_PER_FLOAT
    }

    pub const fn format(&self) -> wgpu::VertexFormat {
        match self.size {
            1 => wgpu::VertexFormat::Float32,
            2 => wgpu::VertexFormat::Float32x2,
            3 => wgpu::VertexFormat::Float32x3,
            _ => wgpu::VertexFormat::Float32x4,
        }
    }

    pub const fn to_wgpu(&self) -> wgpu::VertexAttribute {
        wgpu::VertexAttribute {
            format: self.format(),
            offset: self.byte_offset() as u64,
            shader_location: self.location,
        }
    }
}

/// Interleaved vertex layout with a fixed number of attributes.
///
/// These are caller-side constants; the packer does not enforce them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexLayout<const N: usize> {
    pub attributes: [VertexAttribute; N],
}

/// Position (xyz) followed by color (rgba).
pub type PositionColorLayout = VertexLayout<2>;

impl VertexLayout<2> {
    pub const POSITION: VertexAttribute = VertexAttribute { location: 0, offset: 0, size: 3 };
    pub const COLOR: VertexAttribute = VertexAttribute { location: 1, offset: 3, size: 4 };

    pub const POSITION_COLOR: Self = Self { attributes: [Self::POSITION, Self::COLOR] };
}

impl<const N: usize> VertexLayout<N> {
    /// Floats per vertex.
    pub const fn floats_per_vertex(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < N {
            total += self.attributes[i].size;
            i += 1;
        }
        total
    }

    /// Byte distance between consecutive vertices.
    pub const fn stride_bytes(&self) -> usize {
        self.floats_per_vertex() * BYTES_PER_FLOAT
    }

    /// Whole vertices contained in `float_count` values (a partial tail is dropped).
    pub const fn vertex_count(&self, float_count: usize) -> usize {
        match self.floats_per_vertex() {
            0 => 0,
            per => float_count / per,
        }
    }

    pub fn wgpu_attributes(&self) -> [wgpu::VertexAttribute; N] {
        self.attributes.map(|a| a.to_wgpu())
    }
}
