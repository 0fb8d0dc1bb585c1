//! Static triangle geometry.

/// One vertex of the triangle: homogeneous position `(x, y, z, w)`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TriangleVertex {
    pub position: [f32; 4],
}

impl TriangleVertex {
    /// Shader attribute location of `position`.
    pub const POSITION_LOCATION: u32 = 0;
    /// Floats per position.
    pub const POSITION_COMPONENTS: i32 = 4;
}

/// The triangle uploaded once at initialization.
pub const TRIANGLE_VERTICES: [TriangleVertex; 3] = [
    TriangleVertex {
        position: [0.0, 0.5, 0.0, 1.0],
    },
    TriangleVertex {
        position: [0.5, -0.366, 0.0, 1.0],
    },
    TriangleVertex {
        position: [-0.5, -0.366, 0.0, 1.0],
    },
];

/// Number of vertices in a single draw.
pub const TRIANGLE_VERTEX_COUNT: i32 = TRIANGLE_VERTICES.len() as i32;

/// Raw bytes of [`TRIANGLE_VERTICES`] for buffer upload.
pub fn triangle_bytes() -> &'static [u8] {
    static VERTICES: [TriangleVertex; 3] = TRIANGLE_VERTICES;
    bytemuck::cast_slice(&VERTICES)
}
