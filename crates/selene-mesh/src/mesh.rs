//! Mesh output type and the interleaved vertex layout contract.

/// Interleaved vertex layout shared with upload/render collaborators.
///
/// Per-vertex data (36 bytes):
///
///  offset  0  position  [f32; 4]   (x, y, z, 1.0)
///  offset 16  normal    [f32; 3]
///  offset 28  uv        [f32; 2]
pub struct VertexLayout;

impl VertexLayout {
    pub const FLOATS_PER_VERTEX: usize = 9;
    pub const STRIDE: usize = Self::FLOATS_PER_VERTEX * size_of::<f32>();
    pub const POSITION_OFFSET: usize = 0;
    pub const NORMAL_OFFSET: usize = 4 * size_of::<f32>();
    pub const UV_OFFSET: usize = 7 * size_of::<f32>();
}

/// A generated sphere mesh.
///
/// `vertices` is interleaved per [`VertexLayout`]; `indices` are u16 triangle
/// lists (values are vertex indices, not float offsets). Constructed once by
/// the generator and immutable afterwards; the caller owns it for the
/// lifetime of its GPU buffer upload.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u16>,
}

impl SphereMesh {
    /// Number of vertices, i.e. `vertices.len() / 9`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VertexLayout::FLOATS_PER_VERTEX
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw bytes of the vertex buffer (`vertices.len() * 4`), ready for a
    /// queue write with a 36-byte stride.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the index buffer (`indices.len() * 2`), 16-bit index
    /// format.
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SphereMesh {
        SphereMesh {
            vertices: vec![0.0; VertexLayout::FLOATS_PER_VERTEX * 4],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    #[test]
    fn layout_offsets() {
        assert_eq!(VertexLayout::STRIDE, 36);
        assert_eq!(VertexLayout::POSITION_OFFSET, 0);
        assert_eq!(VertexLayout::NORMAL_OFFSET, 16);
        assert_eq!(VertexLayout::UV_OFFSET, 28);
    }

    #[test]
    fn counts() {
        let mesh = sample();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn byte_views_match_documented_widths() {
        let mesh = sample();
        assert_eq!(mesh.vertex_bytes().len(), mesh.vertices.len() * 4);
        assert_eq!(mesh.index_bytes().len(), mesh.indices.len() * 2);
        assert_eq!(mesh.vertex_bytes().len() % VertexLayout::STRIDE, 0);
    }
}
