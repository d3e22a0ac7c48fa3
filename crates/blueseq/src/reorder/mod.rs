//! Progressive reordering by greedy energy elimination.
//!
//! Purpose
//! - Turn an unordered blue-noise set into a sequence whose prefixes stay well
//!   distributed. Reading the result front to back adds the most spatially
//!   significant points first.
//!
//! Model
//! - Pointer `i` walks the slice. `[i, N)` is the undecided remainder.
//! - Every candidate in the remainder gets a Gaussian energy summed over the
//!   remainder (itself included). The most crowded one (strictly highest
//!   energy, first found on ties) is swapped into slot `i`.
//! - The pass therefore lays points out worst-first; a final reverse makes it
//!   best-first.
//!
//! Cost is O(N³) kernel evaluations; deterministic for a given input order.

use crate::torus::{distance_wrap_sq, Point};

/// Energy kernel configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyCfg {
    /// Gaussian width in torus units. The kernel is `exp(-d² / (2σ²))`.
    pub sigma: f64,
}

impl Default for EnergyCfg {
    fn default() -> Self {
        Self { sigma: 1.0 }
    }
}

impl EnergyCfg {
    #[inline]
    fn two_sigma_sq(&self) -> f64 {
        2.0 * self.sigma * self.sigma
    }
}

/// Energy of `points[candidate]` against every point in `points[from..]`.
///
/// The self term contributes `exp(0) = 1` when `candidate >= from`; it is the
/// same for every candidate and does not change the ranking.
pub fn point_energy(points: &[Point], candidate: usize, from: usize, cfg: EnergyCfg) -> f64 {
    let c = &points[candidate];
    let denom = cfg.two_sigma_sq();
    points[from..]
        .iter()
        .map(|t| (-distance_wrap_sq(c, t) / denom).exp())
        .sum()
}

/// Reorder `points` in place into a progressive sequence (σ = 1).
pub fn reorder_progressive(points: &mut [Point]) {
    reorder_progressive_with(points, EnergyCfg::default());
}

/// Reorder `points` in place into a progressive sequence.
///
/// The result is a permutation of the input. Empty and single-point slices are
/// left untouched.
pub fn reorder_progressive_with(points: &mut [Point], cfg: EnergyCfg) {
    let n = points.len();
    // The final slot has a single candidate; nothing to decide there.
    for i in 0..n.saturating_sub(1) {
        let worst = most_crowded(points, i, cfg);
        points.swap(i, worst);
    }
    points.reverse();
}

/// Index in `[from, len)` with the strictly highest energy over the remainder.
/// NaN energies never win, so a poisoned remainder keeps `from` in place.
fn most_crowded(points: &[Point], from: usize, cfg: EnergyCfg) -> usize {
    let mut worst = from;
    let mut worst_energy = f64::NEG_INFINITY;
    for candidate in from..points.len() {
        let energy = point_energy(points, candidate, from, cfg);
        if energy > worst_energy {
            worst_energy = energy;
            worst = candidate;
        }
    }
    worst
}

#[cfg(test)]
mod tests;
