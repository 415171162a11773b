//! Procedural **UV-sphere** mesh generation for GPU upload.
//!
//! This crate is intentionally free of GPU and windowing dependencies so it
//! can be consumed by upload/render layers, offline tools, and tests without
//! pulling in wgpu / winit code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`mesh`] | `SphereMesh`, `VertexLayout` |
//! | [`sphere`] | `SphereParams`, `generate`, `generate_with` |
//! | [`jitter`] | `Jitter`, `SplitMix64` |
//!
//! # Quick start
//!
//! ```rust
//! use selene_mesh::{generate, SphereParams, VertexLayout};
//!
//! let mesh = generate(SphereParams::default());
//!
//! assert_eq!(mesh.vertex_count(), 33 * 17);
//! assert_eq!(mesh.vertex_bytes().len(), mesh.vertex_count() * VertexLayout::STRIDE);
//! ```
//!
//! Generation is deterministic: two calls with identical parameters produce
//! bit-identical meshes, including the pseudo-random radial perturbation
//! (see [`jitter`]).

pub mod jitter;
pub mod mesh;
pub mod sphere;

pub use jitter::{Jitter, SplitMix64};
pub use mesh::{SphereMesh, VertexLayout};
pub use sphere::{generate, generate_with, SphereParams};
