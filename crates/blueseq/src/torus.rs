//! Distances on the unit torus [0, 1)² (both axes periodic).
//!
//! Each axis wraps independently: the per-axis gap is the shorter of the
//! direct difference and the difference going around the boundary, so no axis
//! contributes more than 0.5 and no distance exceeds `sqrt(0.5)`.

use nalgebra::Vector2;

/// A location on the unit torus, coordinates nominally in [0, 1).
pub type Point = Vector2<f64>;

/// Largest possible wrapped distance between two points in [0, 1)².
pub const MAX_DISTANCE: f64 = std::f64::consts::FRAC_1_SQRT_2;

#[inline]
fn wrap_axis(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(1.0 - d)
}

/// Squared wrapped distance. The energy kernel only needs `d²`.
#[inline]
pub fn distance_wrap_sq(a: &Point, b: &Point) -> f64 {
    let dx = wrap_axis(a.x, b.x);
    let dy = wrap_axis(a.y, b.y);
    dx * dx + dy * dy
}

/// Euclidean distance between `a` and `b` with wrap-around on both axes.
#[inline]
pub fn distance_wrap(a: &Point, b: &Point) -> f64 {
    distance_wrap_sq(a, b).sqrt()
}
