use glam::Mat4;

use crate::coords::Viewport;
use crate::projection::{Orientation, ProjectionMatrix};
use crate::render::{RenderCtx, RenderTarget, TriangleRenderer};
use crate::vertex::{PackedVertexBuffer, PositionColorLayout};

use super::{Scene, SceneConfig};

/// The tutorial scene: clears the surface and draws the configured vertices
/// through an orthographic camera.
pub struct SceneRenderer {
    config: SceneConfig,
    vertices: PackedVertexBuffer,
    viewport: Viewport,
    orientation: Orientation,
    projection: ProjectionMatrix,
    triangle: TriangleRenderer,
}

impl SceneRenderer {
    /// Packs the vertex data up front; GPU resources wait for the surface.
    pub fn new(config: SceneConfig) -> Self {
        let vertices = PackedVertexBuffer::pack(&config.vertices);
        Self {
            config,
            vertices,
            viewport: Viewport::default(),
            orientation: Orientation::default(),
            projection: ProjectionMatrix::IDENTITY,
            triangle: TriangleRenderer::new(),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn vertices(&self) -> &PackedVertexBuffer {
        &self.vertices
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn projection(&self) -> &ProjectionMatrix {
        &self.projection
    }

    /// Model-view-projection for upload (wgpu depth range).
    pub fn mvp(&self) -> Mat4 {
        self.config.camera.mvp_wgpu(&self.projection)
    }

    /// Rebuilds the projection for `viewport`.
    ///
    /// Zero-sized viewports are ignored and keep the previous projection;
    /// returns whether the projection changed.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if !viewport.is_valid() {
            log::trace!("ignoring zero-sized viewport {viewport:?}");
            return false;
        }

        let orientation = self.config.orientation.resolve(viewport.width, viewport.height);
        let projection = viewport.orthographic(self.config.near, self.config.far, orientation);

        self.viewport = viewport;
        self.orientation = orientation;
        if projection == self.projection {
            return false;
        }
        self.projection = projection;

        log::debug!(
            "projection for {}x{} ({orientation:?}): diagonal {:?}",
            viewport.width,
            viewport.height,
            projection.diagonal()
        );
        true
    }
}

impl Scene for SceneRenderer {
    fn surface_created(&mut self, ctx: &RenderCtx<'_>) {
        log::info!(
            "surface created ({} scene, {:?})",
            self.config.variant.name(),
            ctx.surface_format
        );

        if !self.config.variant.draws_geometry() {
            return;
        }

        self.triangle
            .upload_vertices(ctx, &mut self.vertices, &PositionColorLayout::POSITION_COLOR);
        self.triangle.prepare(ctx);
    }

    fn surface_changed(&mut self, ctx: &RenderCtx<'_>, viewport: Viewport) {
        if self.resize(viewport) && self.config.variant.draws_geometry() {
            let mvp = self.mvp();
            self.triangle.set_mvp(ctx, mvp);
        }
    }

    fn draw_frame(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        target.clear(self.config.clear_color);

        if self.config.variant.draws_geometry() {
            self.triangle.render(ctx, target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{build_orthographic, OrientationMode};
    use crate::scene::SceneVariant;

    #[test]
    fn vertices_are_packed_at_construction() {
        let s = SceneRenderer::new(SceneConfig::default());
        assert_eq!(s.vertices().len(), 21 * 4);
        assert_eq!(s.vertices().position(), 0);
        assert_eq!(s.projection(), &ProjectionMatrix::IDENTITY);
    }

    #[test]
    fn resize_builds_portrait_projection() {
        let mut s = SceneRenderer::new(SceneConfig::default());
        assert!(s.resize(Viewport::new(480, 800)));
        assert_eq!(s.orientation(), Orientation::Portrait);
        assert_eq!(
            *s.projection(),
            build_orthographic(480, 800, 1.0, 10.0, Orientation::Portrait)
        );
        assert_eq!(s.viewport(), Viewport::new(480, 800));
    }

    #[test]
    fn same_size_twice_reports_no_change() {
        let mut s = SceneRenderer::new(SceneConfig::default());
        assert!(s.resize(Viewport::new(640, 480)));
        assert!(!s.resize(Viewport::new(640, 480)));
    }

    #[test]
    fn zero_sized_resize_keeps_previous_projection() {
        let mut s = SceneRenderer::new(SceneConfig::default());
        s.resize(Viewport::new(640, 480));
        let before = *s.projection();
        assert!(!s.resize(Viewport::new(0, 480)));
        assert_eq!(*s.projection(), before);
        assert_eq!(s.viewport(), Viewport::new(640, 480));
    }

    #[test]
    fn auto_orientation_tracks_rotation() {
        let config = SceneConfig::default().with_orientation(OrientationMode::Auto);
        let mut s = SceneRenderer::new(config);

        s.resize(Viewport::new(480, 800));
        assert_eq!(s.orientation(), Orientation::Portrait);

        s.resize(Viewport::new(800, 480));
        assert_eq!(s.orientation(), Orientation::Landscape);
        let b = s.projection().diagonal();
        assert!((b[0] - 480.0 / 800.0).abs() < 1e-6);
        assert!((b[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clear_only_variant_still_tracks_projection() {
        let config = SceneConfig::default().with_variant(SceneVariant::ClearOnly);
        let mut s = SceneRenderer::new(config);
        assert!(s.resize(Viewport::new(1024, 768)));
        assert_eq!(s.config().variant, SceneVariant::ClearOnly);
    }

    #[test]
    fn custom_vertices_are_packed_verbatim() {
        let config = SceneConfig::default().with_vertices(vec![0.25f32; 14]);
        let s = SceneRenderer::new(config);
        assert_eq!(s.vertices().to_floats(), vec![0.25f32; 14]);
    }
}
