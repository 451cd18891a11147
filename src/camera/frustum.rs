//! Frustum - six clipping planes for visibility culling
//!
//! Each plane is a Vec4 (A, B, C, D) where (A, B, C) is the inward-pointing
//! unit normal and D the signed distance: a point P is inside the frustum if
//! dot(plane, P_homogeneous) >= 0 for all six planes.
//!
//! Cameras hand these out through `Camera::culling_frustum()`, extracted
//! from the finite-far culling projection, never from the infinite-far
//! render projection.

use glam::{Mat4, Vec3, Vec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0.
/// Normal (A, B, C) points inward (toward the visible volume).
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method: each plane is the sum or difference
    /// of the matrix's last row with one of its first three rows. Works for
    /// both perspective and orthographic projections.
    pub fn from_view_projection(view_projection: &Mat4) -> Self {
        // Rows of the VP matrix, read off as columns of its transpose.
        let t = view_projection.transpose();
        let (r0, r1, r2, r3) = (t.x_axis, t.y_axis, t.z_axis, t.w_axis);

        let mut planes = [
            r3 + r0, // left
            r3 - r0, // right
            r3 + r1, // bottom
            r3 - r1, // top
            r3 + r2, // near
            r3 - r2, // far
        ];

        // Normalize each plane so (A, B, C) is a unit vector and D is a
        // distance in world units.
        for plane in &mut planes {
            let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Test if a world-space point is inside the frustum.
    ///
    /// Points exactly on a plane count as inside.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let p = point.extend(1.0);
        self.planes.iter().all(|plane| plane.dot(p) >= 0.0)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
