use crate::projection::{build_orthographic, Orientation, ProjectionMatrix};

/// Surface size in physical pixels.
///
/// This is what the host reports on every size change and what the
/// orthographic projection is derived from.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// `width / height`; `0.0` when the viewport is degenerate.
    #[inline]
    pub fn aspect(self) -> f32 {
        if self.is_valid() {
            self.width as f32 / self.height as f32
        } else {
            0.0
        }
    }

    /// Orthographic projection for this surface.
    ///
    /// Same contract as [`build_orthographic`]: callers check [`is_valid`](Self::is_valid).
    #[inline]
    pub fn orthographic(self, near: f32, far: f32, orientation: Orientation) -> ProjectionMatrix {
        build_orthographic(self.width, self.height, near, far, orientation)
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for Viewport {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}
