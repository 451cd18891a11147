//! Projection matrix construction and inversion
//!
//! All builders produce GL-convention clip volumes (x, y, z in [-1, 1]).
//! Perspective projections are built as a pair: a render matrix whose far
//! plane is pushed to infinity, and a finite-far culling matrix kept around
//! for frustum extraction. The remap from GL depth to the device depth
//! convention happens later, in the camera's matrix accessors, so everything
//! in this module stays in GL conventions.

use glam::DMat4;

/// Projection family of a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Objects get smaller as they are farther away
    Perspective,

    /// Orthonormal projection, preserves distances
    Ortho,
}

/// Axis along which a field-of-view angle is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fov {
    /// Angle between the top and bottom planes
    Vertical,

    /// Angle between the left and right planes
    Horizontal,
}

/// Build a DMat4 from 16 scalars laid out in row-major order.
///
/// Projection matrices are usually written down row by row in references;
/// this keeps the construction sites readable while glam stores columns.
pub(crate) fn dmat4_from_rows(rows: [[f64; 4]; 4]) -> DMat4 {
    DMat4::from_cols_array_2d(&rows).transpose()
}

/// GL off-center perspective frustum.
///
/// ```text
/// 2n/(r-l)     0       (r+l)/(r-l)      0
///    0      2n/(t-b)   (t+b)/(t-b)      0
///    0         0       (f+n)/(n-f)  2fn/(n-f)
///    0         0           -1           0
/// ```
///
/// Bounds are measured on the near plane. The caller validates them.
pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> DMat4 {
    dmat4_from_rows([
        [
            2.0 * near / (right - left),
            0.0,
            (right + left) / (right - left),
            0.0,
        ],
        [
            0.0,
            2.0 * near / (top - bottom),
            (top + bottom) / (top - bottom),
            0.0,
        ],
        [
            0.0,
            0.0,
            (far + near) / (near - far),
            2.0 * far * near / (near - far),
        ],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

/// GL off-center orthographic projection.
///
/// ```text
/// 2/(r-l)     0        0      -(r+l)/(r-l)
///    0     2/(t-b)     0      -(t+b)/(t-b)
///    0        0    -2/(f-n)   -(f+n)/(f-n)
///    0        0        0           1
/// ```
pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> DMat4 {
    dmat4_from_rows([
        [
            2.0 / (right - left),
            0.0,
            0.0,
            -(right + left) / (right - left),
        ],
        [
            0.0,
            2.0 / (top - bottom),
            0.0,
            -(top + bottom) / (top - bottom),
        ],
        [0.0, 0.0, -2.0 / (far - near), -(far + near) / (far - near)],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Render and culling projections built by one call, plus the near/far
/// bookkeeping that goes with them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProjectionPair {
    pub projection: DMat4,
    pub projection_for_culling: DMat4,
    pub near: f64,
    pub far: f64,
}

impl ProjectionPair {
    /// Canonical projection construction: validate the bounds, substitute the
    /// fallback frustum on degenerate input, then build both matrices.
    ///
    /// Degenerate bounds are `left == right`, `bottom == top`, a perspective
    /// near/far with `near <= 0` or `far <= near`, or an orthographic
    /// `near == far`. They are replaced by (-0.1, 0.1, -0.1, 0.1, 0.1, 100.0)
    /// with a logged diagnostic; the call never fails.
    pub fn build(
        projection: Projection,
        mut left: f64,
        mut right: f64,
        mut bottom: f64,
        mut top: f64,
        mut near: f64,
        mut far: f64,
    ) -> Self {
        let degenerate = left == right
            || bottom == top
            || (projection == Projection::Perspective && (near <= 0.0 || far <= near))
            || (projection == Projection::Ortho && near == far);

        if degenerate {
            crate::nebula_error!(
                "nebula3d::Camera",
                "invalid projection bounds ({}, {}, {}, {}, near {}, far {}), \
                 using default projection",
                left,
                right,
                bottom,
                top,
                near,
                far
            );
            left = -0.1;
            right = 0.1;
            bottom = -0.1;
            top = 0.1;
            near = 0.1;
            far = 100.0;
        }

        match projection {
            Projection::Perspective => {
                let culling = frustum(left, right, bottom, top, near, far);

                // The render matrix gets its far plane pushed to infinity:
                // column 2 row 2 becomes the limit of (f+n)/(n-f) and
                // column 3 row 2 the limit of 2fn/(n-f), as f grows without
                // bound. Only those two entries change.
                let mut m = culling.to_cols_array_2d();
                m[2][2] = -1.0;
                m[3][2] = -2.0 * near;

                Self {
                    projection: DMat4::from_cols_array_2d(&m),
                    projection_for_culling: culling,
                    near,
                    far,
                }
            }
            Projection::Ortho => {
                let p = ortho(left, right, bottom, top, near, far);
                Self {
                    projection: p,
                    projection_for_culling: p,
                    near,
                    far,
                }
            }
        }
    }
}

/// Analytic inverse for the two projection families this library builds.
///
/// The family is picked from column 2 row 3: nonzero means perspective
/// (including the infinite-far render variant), zero means orthographic.
/// Both closed forms also accept the off-center (sheared) variants.
///
/// Matrices outside these two families produce unspecified output. This is
/// not checked; callers own the precondition.
pub fn inverse_projection(p: &DMat4) -> DMat4 {
    let m = p.to_cols_array_2d();
    let mut r = [[0.0f64; 4]; 4];

    let a = 1.0 / m[0][0];
    let b = 1.0 / m[1][1];

    if m[2][3] != 0.0 {
        // Perspective family, possibly off-center, far plane finite or not.
        let c = 1.0 / m[3][2];
        r[0][0] = a;
        r[1][1] = b;
        r[2][2] = 0.0;
        r[2][3] = c;
        r[3][0] = m[2][0] * a;
        r[3][1] = m[2][1] * b;
        r[3][2] = -1.0;
        r[3][3] = m[2][2] * c;
    } else {
        // Orthographic family, diagonal scale plus translation.
        let c = 1.0 / m[2][2];
        r[0][0] = a;
        r[1][1] = b;
        r[2][2] = c;
        r[3][0] = -m[3][0] * a;
        r[3][1] = -m[3][1] * b;
        r[3][2] = -m[3][2] * c;
        r[3][3] = 1.0;
    }

    DMat4::from_cols_array_2d(&r)
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
