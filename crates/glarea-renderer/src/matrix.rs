//! 4×4 rotation matrices for the `mvp` uniform.
//!
//! Column-major layout matching GLSL `mat4` uploaded without transpose.
//! Angles are in degrees. The elementary rotations follow the GL-area
//! demo convention, written row by row as:
//!
//! ```text
//! Rz = ⎡  c  s  0 ⎤   Ry = ⎡ c  0 -s ⎤   Rx = ⎡ 1  0  0 ⎤
//!      ⎢ -s  c  0 ⎥        ⎢ 0  1  0 ⎥        ⎢ 0  c  s ⎥
//!      ⎣  0  0  1 ⎦        ⎣ s  0  c ⎦        ⎣ 0 -s  c ⎦
//! ```

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

fn sin_cos_deg(degrees: f32) -> (f32, f32) {
    degrees.to_radians().sin_cos()
}

/// Combined rotation `Rz(psi) · Ry(theta) · Rx(phi)`.
///
/// `phi`, `theta` and `psi` rotate about X, Y and Z respectively. The
/// translation column is zero and there is no perspective term. NaN or
/// infinite angles propagate into the result.
pub fn compute_matrix(phi: f32, theta: f32, psi: f32) -> Mat4 {
    let (s1, c1) = sin_cos_deg(phi);
    let (s2, c2) = sin_cos_deg(theta);
    let (s3, c3) = sin_cos_deg(psi);

    [
        // col 0
        c3 * c2,
        -s3 * c2,
        s2,
        0.0,
        // col 1
        s3 * c1 + c3 * s2 * s1,
        c3 * c1 - s3 * s2 * s1,
        -c2 * s1,
        0.0,
        // col 2
        s3 * s1 - c3 * s2 * c1,
        c3 * s1 + s3 * s2 * c1,
        c2 * c1,
        0.0,
        // col 3
        0.0,
        0.0,
        0.0,
        1.0,
    ]
}

/// Rotation about the X axis.
pub fn rotate_x(degrees: f32) -> Mat4 {
    let (s, c) = sin_cos_deg(degrees);
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, -s, 0.0, 0.0, s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation about the Y axis.
pub fn rotate_y(degrees: f32) -> Mat4 {
    let (s, c) = sin_cos_deg(degrees);
    [
        c, 0.0, s, 0.0, 0.0, 1.0, 0.0, 0.0, -s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation about the Z axis.
pub fn rotate_z(degrees: f32) -> Mat4 {
    let (s, c) = sin_cos_deg(degrees);
    [
        c, -s, 0.0, 0.0, s, c, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform a homogeneous point: result = m × v.
pub fn transform(m: &Mat4, v: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, slot) in out.iter_mut().enumerate() {
        *slot = (0..4).map(|k| m[k * 4 + row] * v[k]).sum();
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
