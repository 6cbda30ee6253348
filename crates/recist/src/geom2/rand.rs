//! Synthetic lesion contours (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic, parameterizable point lists that look like slice outlines:
//!   an ellipse with bounded angular and radial jitter, traced in angle order.
//!   Radial jitter makes the outline non-convex, so hulls actually prune points.
//! - Used by property tests and criterion benches; determinism uses a replay
//!   token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter contour configuration.
#[derive(Clone, Copy, Debug)]
pub struct ContourCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii scale by `1 + u`, `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Ellipse semi-axes before rotation.
    pub semi_axes: Vector2<f64>,
    /// Outline center (e.g. pixel coordinates of the nodule).
    pub center: Vector2<f64>,
    /// Random orientation of the ellipse?
    pub random_rotation: bool,
}
impl Default for ContourCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(48),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.1,
            semi_axes: Vector2::new(12.0, 8.0),
            center: Vector2::new(256.0, 256.0),
            random_rotation: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a closed outline in boundary (angle) order.
pub fn draw_contour_radial(cfg: ContourCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let delta = std::f64::consts::TAU / (n as f64);
    let rot = if cfg.random_rotation {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let (sin_r, cos_r) = rot.sin_cos();
    (0..n)
        .map(|k| {
            let th = (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let s = (1.0 + u).max(1e-6);
            let x = th.cos() * cfg.semi_axes.x * s;
            let y = th.sin() * cfg.semi_axes.y * s;
            cfg.center + Vector2::new(cos_r * x - sin_r * y, sin_r * x + cos_r * y)
        })
        .collect()
}
