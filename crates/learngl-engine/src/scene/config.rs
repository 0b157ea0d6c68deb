use crate::camera::Camera;
use crate::coords::ColorRgba;
use crate::projection::OrientationMode;
use crate::vertex::TRIANGLE_VERTICES;

/// Which flavour of the scene runs.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SceneVariant {
    /// Clear, then draw the vertex data.
    #[default]
    Triangle,
    /// Clear only; no pipeline is built.
    ClearOnly,
}

impl SceneVariant {
    #[inline]
    pub fn draws_geometry(self) -> bool {
        matches!(self, Self::Triangle)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::ClearOnly => "clear-only",
        }
    }
}

/// Scene parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub variant: SceneVariant,
    pub clear_color: ColorRgba,
    /// Near clip plane distance; must be less than `far`.
    pub near: f32,
    pub far: f32,
    pub orientation: OrientationMode,
    pub camera: Camera,
    /// Interleaved `x, y, z, r, g, b, a` per vertex.
    pub vertices: Vec<f32>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            variant: SceneVariant::default(),
            clear_color: ColorRgba::white(),
            near: 1.0,
            far: 10.0,
            orientation: OrientationMode::Portrait,
            camera: Camera::default(),
            vertices: TRIANGLE_VERTICES.to_vec(),
        }
    }
}

impl SceneConfig {
    pub fn with_variant(mut self, variant: SceneVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_orientation(mut self, orientation: OrientationMode) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    pub fn with_clear_color(mut self, color: ColorRgba) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_vertices(mut self, vertices: impl Into<Vec<f32>>) -> Self {
        self.vertices = vertices.into();
        self
    }

    /// Checks the preconditions the projection builder does not.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.near.is_finite() && self.far.is_finite(),
            "clip planes must be finite (near = {}, far = {})",
            self.near,
            self.far
        );
        anyhow::ensure!(
            self.far > self.near,
            "far plane ({}) must be beyond near plane ({})",
            self.far,
            self.near
        );
        anyhow::ensure!(self.clear_color.is_finite(), "clear color must be finite");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tutorial() {
        let c = SceneConfig::default();
        assert_eq!(c.variant, SceneVariant::Triangle);
        assert_eq!(c.clear_color, ColorRgba::white());
        assert_eq!((c.near, c.far), (1.0, 10.0));
        assert_eq!(c.orientation, OrientationMode::Portrait);
        assert_eq!(c.vertices.len(), 21);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn inverted_planes_are_rejected() {
        let err = SceneConfig::default().with_clip_planes(10.0, 1.0).validate().unwrap_err();
        assert!(err.to_string().contains("far plane"));
        assert!(SceneConfig::default().with_clip_planes(2.0, 2.0).validate().is_err());
        assert!(SceneConfig::default().with_clip_planes(f32::NAN, 2.0).validate().is_err());
    }

    #[test]
    fn variant_names() {
        assert_eq!(SceneVariant::Triangle.name(), "triangle");
        assert_eq!(SceneVariant::ClearOnly.name(), "clear-only");
        assert!(!SceneVariant::ClearOnly.draws_geometry());
    }
}
