//! JSON manifest describing the exported buffers.
//!
//! The manifest is the machine-readable half of the upload contract: a
//! loader reads it to declare the vertex attribute layout and to size its
//! GPU buffers without parsing the binary blobs.

use selene_mesh::{SphereMesh, SphereParams, VertexLayout};
use serde::Serialize;

pub const VERTICES_FILE: &str = "vertices.bin";
pub const INDICES_FILE: &str = "indices.bin";
pub const MANIFEST_FILE: &str = "mesh.json";

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub vertices_file: &'static str,
    pub indices_file: &'static str,

    pub vertex_count: usize,
    pub index_count: usize,
    pub triangle_count: usize,

    pub vertex_stride: usize,
    pub position_offset: usize,
    pub normal_offset: usize,
    pub uv_offset: usize,
    pub index_format: &'static str,

    pub params: ParamsEcho,
}

/// Generation parameters echoed into the manifest so an exported mesh can be
/// reproduced from its descriptor alone.
#[derive(Debug, Serialize)]
pub struct ParamsEcho {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub randomness: f32,
}

impl Manifest {
    pub fn new(params: SphereParams, mesh: &SphereMesh) -> Self {
        Self {
            vertices_file: VERTICES_FILE,
            indices_file: INDICES_FILE,
            vertex_count: mesh.vertex_count(),
            index_count: mesh.index_count(),
            triangle_count: mesh.triangle_count(),
            vertex_stride: VertexLayout::STRIDE,
            position_offset: VertexLayout::POSITION_OFFSET,
            normal_offset: VertexLayout::NORMAL_OFFSET,
            uv_offset: VertexLayout::UV_OFFSET,
            index_format: "uint16",
            params: ParamsEcho {
                radius: params.radius,
                width_segments: params.width_segments,
                height_segments: params.height_segments,
                randomness: params.randomness,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selene_mesh::generate;

    #[test]
    fn manifest_matches_mesh_and_layout() {
        let params = SphereParams { width_segments: 4, height_segments: 2, ..Default::default() };
        let mesh = generate(params);
        let manifest = Manifest::new(params, &mesh);

        assert_eq!(manifest.vertex_count, 15);
        assert_eq!(manifest.index_count, 24);
        assert_eq!(manifest.triangle_count, 8);
        assert_eq!(manifest.vertex_stride, 36);
        assert_eq!(manifest.normal_offset, 16);
        assert_eq!(manifest.uv_offset, 28);
    }

    #[test]
    fn serializes_to_stable_json() {
        let params = SphereParams::default();
        let mesh = generate(params);
        let json = serde_json::to_value(Manifest::new(params, &mesh)).unwrap();

        assert_eq!(json["index_format"], "uint16");
        assert_eq!(json["vertices_file"], VERTICES_FILE);
        assert_eq!(json["params"]["width_segments"], 32);
    }
}
