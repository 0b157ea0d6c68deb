use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::Orientation;

/// Frustum edges derived from the surface size before the matrix is built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthoBounds {
    /// Applies the standard orthographic formula (OpenGL clip space).
    pub fn to_matrix(self) -> ProjectionMatrix {
        let Self { left, right, bottom, top, near, far } = self;

        let mut m = [0.0f32; 16];
        m[0] = 2.0 / (right - left);
        m[5] = 2.0 / (top - bottom);
        m[10] = -2.0 / (far - near);
        m[12] = -(right + left) / (right - left);
        m[13] = -(top + bottom) / (top - bottom);
        m[14] = -(far + near) / (far - near);
        m[15] = 1.0;

        ProjectionMatrix(m)
    }
}

/// Column-major 4x4 projection matrix.
///
/// Element `i` is row `i % 4`, column `i / 4`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ProjectionMatrix(pub [f32; 16]);

impl ProjectionMatrix {
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    /// Returns the element at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[col * 4 + row]
    }

    /// The three scale terms `[m00, m11, m22]`.
    #[inline]
    pub fn diagonal(&self) -> [f32; 3] {
        [self.0[0], self.0[5], self.0[10]]
    }

    #[inline]
    pub fn to_mat4(self) -> Mat4 {
        Mat4::from_cols_array(&self.0)
    }

    /// Remaps clip-space depth from `[-1, 1]` to `[0, 1]`.
    ///
    /// wgpu clips fragments with `z < 0`; the OpenGL-style matrix would place
    /// everything between the near plane and the midpoint outside the volume.
    pub fn to_wgpu_clip(self) -> Mat4 {
        gl_to_wgpu_depth() * self.to_mat4()
    }
}

impl Default for ProjectionMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<ProjectionMatrix> for Mat4 {
    fn from(m: ProjectionMatrix) -> Self {
        m.to_mat4()
    }
}

pub(crate) fn gl_to_wgpu_depth() -> Mat4 {
    Mat4::from_cols_array(&[
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 0.5, 0.0, //
        0.0, 0.0, 0.5, 1.0,
    ])
}

/// Computes the frustum edges for a surface of `width` x `height` pixels.
///
/// Callers must pass `width > 0` and `height > 0`; nothing is validated here.
pub fn ortho_bounds(
    width: u32,
    height: u32,
    near: f32,
    far: f32,
    orientation: Orientation,
) -> OrthoBounds {
    match orientation {
        Orientation::Portrait => {
            let ratio = height as f32 / width as f32;
            OrthoBounds { left: -1.0, right: 1.0, bottom: -ratio, top: ratio, near, far }
        }
        Orientation::Landscape => {
            let ratio = width as f32 / height as f32;
            OrthoBounds { left: -ratio, right: ratio, bottom: -1.0, top: 1.0, near, far }
        }
    }
}

/// Builds the orthographic projection for a surface of `width` x `height` pixels.
///
/// Requires `width > 0`, `height > 0` and `far > near`. Violations produce a
/// degenerate matrix (infinities or NaNs) rather than an error.
pub fn build_orthographic(
    width: u32,
    height: u32,
    near: f32,
    far: f32,
    orientation: Orientation,
) -> ProjectionMatrix {
    ortho_bounds(width, height, near, far, orientation).to_matrix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn portrait_bounds_scale_vertical_axis() {
        for (w, h) in [(480u32, 800u32), (800, 480), (1, 1), (1080, 2400), (7, 3)] {
            let b = ortho_bounds(w, h, 1.0, 10.0, Orientation::Portrait);
            let ratio = h as f32 / w as f32;
            assert_eq!(b.top, ratio);
            assert_eq!(b.bottom, -ratio);
            assert_eq!(b.left, -1.0);
            assert_eq!(b.right, 1.0);
        }
    }

    #[test]
    fn landscape_bounds_scale_horizontal_axis() {
        for (w, h) in [(480u32, 800u32), (800, 480), (1, 1), (2400, 1080), (3, 7)] {
            let b = ortho_bounds(w, h, 1.0, 10.0, Orientation::Landscape);
            let ratio = w as f32 / h as f32;
            assert_eq!(b.left, -ratio);
            assert_eq!(b.right, ratio);
            assert_eq!(b.top, 1.0);
            assert_eq!(b.bottom, -1.0);
        }
    }

    #[test]
    fn square_surface_is_symmetric_in_both_orientations() {
        for orientation in [Orientation::Portrait, Orientation::Landscape] {
            let b = ortho_bounds(600, 600, 1.0, 10.0, orientation);
            assert_eq!((b.left, b.right, b.bottom, b.top), (-1.0, 1.0, -1.0, 1.0));
        }
        assert_eq!(
            build_orthographic(600, 600, 1.0, 10.0, Orientation::Portrait),
            build_orthographic(600, 600, 1.0, 10.0, Orientation::Landscape),
        );
    }

    #[test]
    fn near_far_pass_through() {
        let b = ortho_bounds(320, 240, 0.5, 42.0, Orientation::Landscape);
        assert_eq!((b.near, b.far), (0.5, 42.0));
    }

    // ── matrix ────────────────────────────────────────────────────────────

    #[test]
    fn portrait_phone_diagonal() {
        let m = build_orthographic(480, 800, 1.0, 10.0, Orientation::Portrait);
        let [sx, sy, sz] = m.diagonal();
        assert!(close(sx, 1.0), "{sx}");
        assert!(close(sy, 0.6), "{sy}");
        assert!(close(sz, -2.0 / 9.0), "{sz}");
        assert_eq!(m.0[15], 1.0);
    }

    #[test]
    fn symmetric_frustum_has_no_xy_translation() {
        let m = build_orthographic(480, 800, 1.0, 10.0, Orientation::Portrait);
        assert_eq!(m.get(0, 3), 0.0);
        assert_eq!(m.get(1, 3), 0.0);
        assert!(close(m.get(2, 3), -11.0 / 9.0));
    }

    #[test]
    fn off_diagonal_terms_are_zero() {
        let m = build_orthographic(1280, 720, 1.0, 10.0, Orientation::Landscape);
        for (i, v) in m.0.iter().enumerate() {
            if matches!(i, 0 | 5 | 10 | 12 | 13 | 14 | 15) {
                continue;
            }
            assert_eq!(*v, 0.0, "element {i}");
        }
    }

    #[test]
    fn asymmetric_bounds_translate() {
        let b = OrthoBounds { left: 0.0, right: 4.0, bottom: 0.0, top: 2.0, near: 1.0, far: 3.0 };
        let m = b.to_matrix();
        assert!(close(m.get(0, 0), 0.5));
        assert!(close(m.get(1, 1), 1.0));
        assert!(close(m.get(2, 2), -1.0));
        assert!(close(m.get(0, 3), -1.0));
        assert!(close(m.get(1, 3), -1.0));
        assert!(close(m.get(2, 3), -2.0));
    }

    #[test]
    fn matches_glam_gl_orthographic() {
        let b = ortho_bounds(800, 480, 1.0, 10.0, Orientation::Landscape);
        let ours = b.to_matrix().to_mat4();
        let glam = Mat4::orthographic_rh_gl(b.left, b.right, b.bottom, b.top, b.near, b.far);
        assert!(ours.abs_diff_eq(glam, 1e-6));
    }

    #[test]
    fn frustum_corners_land_on_clip_edges() {
        let b = ortho_bounds(480, 800, 1.0, 10.0, Orientation::Portrait);
        let m = b.to_matrix().to_mat4();

        let near_corner = m * Vec4::new(b.right, b.top, -b.near, 1.0);
        assert!(close(near_corner.x, 1.0));
        assert!(close(near_corner.y, 1.0));
        assert!(close(near_corner.z, -1.0));

        let far_corner = m * Vec4::new(b.left, b.bottom, -b.far, 1.0);
        assert!(close(far_corner.x, -1.0));
        assert!(close(far_corner.y, -1.0));
        assert!(close(far_corner.z, 1.0));
    }

    #[test]
    fn zero_width_is_degenerate_not_a_panic() {
        let m = build_orthographic(0, 800, 1.0, 10.0, Orientation::Portrait);
        assert!(!m.0.iter().all(|v| v.is_finite()));
    }

    // ── wgpu depth remap ──────────────────────────────────────────────────

    #[test]
    fn wgpu_clip_maps_gl_depth_range_to_unit() {
        let b = ortho_bounds(480, 800, 1.0, 10.0, Orientation::Portrait);
        let m = b.to_matrix().to_wgpu_clip();

        let near = m * Vec4::new(0.0, 0.0, -b.near, 1.0);
        let far = m * Vec4::new(0.0, 0.0, -b.far, 1.0);
        assert!(close(near.z, 0.0), "{}", near.z);
        assert!(close(far.z, 1.0), "{}", far.z);
    }

    #[test]
    fn wgpu_clip_keeps_xy() {
        let p = build_orthographic(800, 480, 1.0, 10.0, Orientation::Landscape);
        let v = Vec4::new(0.3, -0.7, -2.0, 1.0);
        let gl = p.to_mat4() * v;
        let wg = p.to_wgpu_clip() * v;
        assert_eq!((gl.x, gl.y, gl.w), (wg.x, wg.y, wg.w));
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(ProjectionMatrix::default().to_mat4(), Mat4::IDENTITY);
    }
}
