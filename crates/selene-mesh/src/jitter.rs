//! Deterministic jitter sources for radial vertex perturbation.
//!
//! The generator draws one sample per freshly computed vertex. Determinism
//! outranks true randomness here: reference meshes must be reproducible
//! call-to-call and across dependency upgrades, so the default source is a
//! small fixed-seed generator rather than an OS-seeded one.

/// Seed used by [`SplitMix64::default`], and therefore by
/// [`crate::sphere::generate`].
pub const DEFAULT_SEED: u64 = 12345;

/// Source of radial jitter samples.
///
/// `sample` returns a value uniform in `[-0.5, 0.5)`. Implementations are
/// created fresh per generator call and advanced only by it, so concurrent
/// generator invocations never share random state.
pub trait Jitter {
    fn sample(&mut self) -> f32;
}

/// SplitMix64 pseudo-random generator (Steele, Lea & Flood).
///
/// Chosen over a `rand`-crate generator because the output stream is part of
/// the mesh contract: `StdRng` documents that its stream may change between
/// crate versions, which would silently change every perturbed reference mesh.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl Default for SplitMix64 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Jitter for SplitMix64 {
    fn sample(&mut self) -> f32 {
        // Top 24 bits give an exact f32 in [0, 1).
        let bits = (self.next_u64() >> 40) as f32;
        bits * (1.0 / (1u64 << 24) as f32) - 0.5
    }
}
