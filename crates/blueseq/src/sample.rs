//! Seeded point sets and a simple prefix-quality probe.
//!
//! Benches, tests and the demo example need reproducible inputs without a
//! BNOT data directory; `uniform_points` provides white noise on the torus.
//! `prefix_min_spacing` is the usual quick look at progressive quality: the
//! closest-pair distance of every prefix.

use crate::torus::{distance_wrap, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `n` independent uniform points in [0, 1)², reproducible from `seed`.
pub fn uniform_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect()
}

/// Closest-pair wrapped distance of each prefix of length `2..=n`.
///
/// Entry `k - 2` belongs to the prefix of length `k`. The sequence is
/// non-increasing by construction; a progressive order keeps it high for as
/// long as possible.
pub fn prefix_min_spacing(points: &[Point]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len().saturating_sub(1));
    let mut current = f64::INFINITY;
    for k in 1..points.len() {
        for j in 0..k {
            current = current.min(distance_wrap(&points[k], &points[j]));
        }
        out.push(current);
    }
    out
}
