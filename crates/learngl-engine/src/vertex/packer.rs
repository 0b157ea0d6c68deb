use super::VertexAttribute;

/// Bytes per packed `f32`.
pub const BYTES_PER_FLOAT: usize = std::mem::size_of::<f32>();

/// `f32` values laid out contiguously in native byte order, with a cursor.
///
/// Invariant: `len() == BYTES_PER_FLOAT * float_count()`.
///
/// The cursor is a byte offset. It is `0` after [`pack`](Self::pack) and is
/// moved to an attribute's offset with [`seek_attribute`](Self::seek_attribute)
/// before that attribute is described to the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedVertexBuffer {
    bytes: Vec<u8>,
    position: usize,
}

impl PackedVertexBuffer {
    /// Copies `values` into a freshly allocated native-order buffer.
    ///
    /// Allocates exactly `4 * values.len()` bytes. The value count is not checked
    /// against any vertex stride.
    pub fn pack(values: &[f32]) -> Self {
        let bytes: Vec<u8> = bytemuck::cast_slice::<f32, u8>(values).to_vec();
        debug_assert_eq!(bytes.len(), values.len() * BYTES_PER_FLOAT);
        Self { bytes, position: 0 }
    }

    /// Total size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn float_count(&self) -> usize {
        self.bytes.len() / BYTES_PER_FLOAT
    }

    /// The whole buffer, independent of the cursor.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes from the cursor to the end.
    #[inline]
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.bytes[self.position..]
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to `byte_offset`, clamped to `len()`.
    pub fn set_position(&mut self, byte_offset: usize) -> &mut Self {
        self.position = byte_offset.min(self.bytes.len());
        self
    }

    pub fn rewind(&mut self) -> &mut Self {
        self.set_position(0)
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Positions the cursor at the first occurrence of `attribute` and returns
    /// that byte offset.
    pub fn seek_attribute(&mut self, attribute: &VertexAttribute) -> usize {
        self.set_position(attribute.byte_offset());
        self.position
    }

    /// Reads one native-order `f32` at the cursor and advances past it.
    ///
    /// Returns `None` when fewer than four bytes remain.
    pub fn read_f32(&mut self) -> Option<f32> {
        let end = self.position.checked_add(BYTES_PER_FLOAT)?;
        let chunk: [u8; BYTES_PER_FLOAT] = self.bytes.get(self.position..end)?.try_into().ok()?;
        self.position = end;
        Some(f32::from_ne_bytes(chunk))
    }

    /// Decodes every value, ignoring the cursor.
    pub fn to_floats(&self) -> Vec<f32> {
        self.bytes
            .chunks_exact(BYTES_PER_FLOAT)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }
}

impl From<&[f32]> for PackedVertexBuffer {
    fn from(values: &[f32]) -> Self {
        Self::pack(values)
    }
}
