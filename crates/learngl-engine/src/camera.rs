//! Fixed camera and model-view-projection composition.

use glam::{Mat4, Vec3};

use crate::projection::ProjectionMatrix;

/// Look-at camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Point the eye looks toward.
    pub look: Vec3,
    /// Up direction.
    pub up: Vec3,
}

impl Default for Camera {
    /// Eye slightly in front of the origin, looking down `-Z`.
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 1.5),
            look: Vec3::new(0.0, 0.0, -5.0),
            up: Vec3::Y,
        }
    }
}

impl Camera {
    // right-handed, matching the projection's clip-space convention
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.look, self.up)
    }

    /// The scene draws a single static model at the origin.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    /// `projection * view * model`, OpenGL depth convention.
    pub fn mvp(&self, projection: &ProjectionMatrix) -> Mat4 {
        projection.to_mat4() * self.view_matrix() * self.model_matrix()
    }

    /// `projection * view * model` with depth remapped for wgpu.
    pub fn mvp_wgpu(&self, projection: &ProjectionMatrix) -> Mat4 {
        projection.to_wgpu_clip() * self.view_matrix() * self.model_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{build_orthographic, Orientation};
    use crate::vertex::TRIANGLE_VERTICES;
    use glam::Vec4;

    #[test]
    fn default_view_moves_world_back_by_eye_distance() {
        let v = Camera::default().view_matrix();
        let origin = v * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.z + 1.5).abs() < 1e-6);
        assert!(origin.x.abs() < 1e-6 && origin.y.abs() < 1e-6);
    }

    #[test]
    fn triangle_fits_wgpu_clip_volume() {
        let p = build_orthographic(480, 800, 1.0, 10.0, Orientation::Portrait);
        let mvp = Camera::default().mvp_wgpu(&p);

        for v in TRIANGLE_VERTICES.chunks_exact(7) {
            let clip = mvp * Vec4::new(v[0], v[1], v[2], 1.0);
            assert!(clip.x.abs() <= clip.w);
            assert!(clip.y.abs() <= clip.w);
            assert!((0.0..=clip.w).contains(&clip.z), "z = {}", clip.z);
        }
    }

    #[test]
    fn portrait_squashes_y_by_aspect() {
        let p = build_orthographic(480, 800, 1.0, 10.0, Orientation::Portrait);
        let clip = Camera::default().mvp(&p) * Vec4::new(0.5, 0.5, 0.0, 1.0);
        assert!((clip.x - 0.5).abs() < 1e-6);
        assert!((clip.y - 0.3).abs() < 1e-6);
    }
}
