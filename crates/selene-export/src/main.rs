//! `selene-export` — generates a UV-sphere mesh and writes it to disk as
//! GPU-upload-ready buffers: `vertices.bin` (36-byte stride, interleaved
//! position/normal/uv), `indices.bin` (uint16 triangle list), and a
//! `mesh.json` manifest describing the layout.

mod manifest;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use selene_mesh::{generate, SphereParams};

use crate::manifest::{Manifest, INDICES_FILE, MANIFEST_FILE, VERTICES_FILE};

#[derive(Parser, Debug)]
#[command(name = "selene-export", about = "Export a procedural sphere mesh for GPU upload")]
struct Cli {
    /// Sphere radius.
    #[arg(long, default_value_t = 1.0)]
    radius: f32,

    /// Longitude subdivisions (clamped to at least 3).
    #[arg(long, default_value_t = 32)]
    width_segments: u32,

    /// Latitude subdivisions (clamped to at least 2).
    #[arg(long, default_value_t = 16)]
    height_segments: u32,

    /// Radial perturbation as a fraction of the radius, usually 0..=1.
    #[arg(long, default_value_t = 0.0)]
    randomness: f32,

    /// Output directory, created if missing.
    #[arg(long, default_value = "mesh-out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let params = SphereParams {
        radius: cli.radius,
        width_segments: cli.width_segments,
        height_segments: cli.height_segments,
        randomness: cli.randomness,
    };

    let mesh = generate(params);
    log::info!(
        "generated sphere: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating output directory {}", cli.out.display()))?;

    let vertices_path = cli.out.join(VERTICES_FILE);
    fs::write(&vertices_path, mesh.vertex_bytes())
        .with_context(|| format!("writing {}", vertices_path.display()))?;

    let indices_path = cli.out.join(INDICES_FILE);
    fs::write(&indices_path, mesh.index_bytes())
        .with_context(|| format!("writing {}", indices_path.display()))?;

    let manifest = Manifest::new(params, &mesh);
    let manifest_path = cli.out.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest).context("serializing manifest")?;
    fs::write(&manifest_path, json)
        .with_context(|| format!("writing {}", manifest_path.display()))?;

    log::info!(
        "wrote {} ({} bytes), {} ({} bytes), {}",
        vertices_path.display(),
        mesh.vertex_bytes().len(),
        indices_path.display(),
        mesh.index_bytes().len(),
        manifest_path.display()
    );

    Ok(())
}

/// Initializes the global logger. RUST_LOG is honored; info is the default.
fn init_logging() {
    let mut builder = env_logger::Builder::new();

    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }

    builder.init();
}
