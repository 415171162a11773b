//! Latitude/longitude sphere generator with deterministic radial jitter.

use std::f32::consts::{PI, TAU};

use crate::jitter::{Jitter, SplitMix64};
use crate::mesh::{SphereMesh, VertexLayout};

/// Fewer columns than this would degenerate the rings.
pub const MIN_WIDTH_SEGMENTS: u32 = 3;
/// Fewer rows than this would collapse the pole rings into each other.
pub const MIN_HEIGHT_SEGMENTS: u32 = 2;

/// Sphere generation parameters.
///
/// Segment counts below the minimums are clamped, never rejected. `radius`
/// and `randomness` are not validated: a non-positive radius produces a
/// degenerate or inverted mesh and non-finite inputs propagate through the
/// arithmetic — validating that is the caller's concern, the generator is a
/// total function.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphereParams {
    pub radius: f32,

    /// Longitude subdivisions; clamped to at least [`MIN_WIDTH_SEGMENTS`].
    pub width_segments: u32,

    /// Latitude subdivisions; clamped to at least [`MIN_HEIGHT_SEGMENTS`].
    pub height_segments: u32,

    /// Radial perturbation amplitude as a fraction of `radius`, usually in
    /// `[0, 1]`. Values outside that range simply scale the displacement.
    pub randomness: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 16,
            randomness: 0.0,
        }
    }
}

/// Generates a sphere mesh with the default fixed-seed jitter source.
///
/// Deterministic: two calls with identical parameters return bit-identical
/// meshes. Each call seeds its own [`SplitMix64`], so concurrent calls do
/// not share random state.
pub fn generate(params: SphereParams) -> SphereMesh {
    generate_with(params, &mut SplitMix64::default())
}

/// Generates a sphere mesh, drawing radial jitter from `jitter`.
///
/// One sample is consumed per freshly computed vertex: seam columns reuse
/// their ring's first vertex and pole rings reuse a single point per ring,
/// neither of which advances the source.
pub fn generate_with(params: SphereParams, jitter: &mut impl Jitter) -> SphereMesh {
    let SphereParams { radius, width_segments, height_segments, randomness } = params;

    let w = width_segments.max(MIN_WIDTH_SEGMENTS);
    let h = height_segments.max(MIN_HEIGHT_SEGMENTS);
    if w != width_segments || h != height_segments {
        log::debug!(
            "segment counts clamped to {w}x{h} (requested {width_segments}x{height_segments})"
        );
    }

    let ring_len = w as usize + 1;
    let ring_count = h as usize + 1;

    let mut vertices =
        Vec::with_capacity(ring_len * ring_count * VertexLayout::FLOATS_PER_VERTEX);
    let mut indices: Vec<u16> = Vec::new();
    let mut grid: Vec<Vec<u16>> = Vec::with_capacity(ring_count);

    let mut first_vertex = [0.0f32; 3];
    let mut vertex = [0.0f32; 3];
    let mut vertex_index = 0usize;

    for iy in 0..=h {
        let mut row = Vec::with_capacity(ring_len);
        let v = iy as f32 / h as f32;

        // Shift the polar rings horizontally by half a column so the texture
        // does not pinch at the seam.
        let u_offset = if iy == 0 {
            0.5 / w as f32
        } else if iy == h {
            -0.5 / w as f32
        } else {
            0.0
        };

        for ix in 0..=w {
            let u = ix as f32 / w as f32;

            if ix == w {
                // Close the seam with the exact bits of this ring's column 0.
                vertex = first_vertex;
            } else if ix == 0 || (iy != 0 && iy != h) {
                let r = radius + jitter.sample() * 2.0 * randomness * radius;

                vertex[0] = -r * (u * TAU).cos() * (v * PI).sin();
                vertex[1] = r * (v * PI).cos();
                vertex[2] = r * (u * TAU).sin() * (v * PI).sin();

                if ix == 0 {
                    first_vertex = vertex;
                }
            }
            // Otherwise this is an interior column of a pole ring: carry the
            // previous column's vertex, every column of a pole ring is the
            // same physical point.

            vertices.extend_from_slice(&[vertex[0], vertex[1], vertex[2], 1.0]);

            let normal = normalize(vertex);
            vertices.extend_from_slice(&normal);

            vertices.push(u + u_offset);
            vertices.push(1.0 - v);

            row.push(vertex_index as u16);
            vertex_index += 1;
        }

        grid.push(row);
    }

    for iy in 0..h as usize {
        for ix in 0..w as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];

            // Each pole collapses one edge of its quads, so the quad rows
            // touching a pole contribute one triangle instead of two.
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h as usize - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    log::trace!(
        "generated sphere mesh: {} vertices, {} triangles",
        vertex_index,
        indices.len() / 3
    );

    SphereMesh { vertices, indices }
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 1e-8 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        // Degenerate (radius ~0) vertex: keep the zero vector instead of
        // dividing into NaN/∞.
        v
    }
}
