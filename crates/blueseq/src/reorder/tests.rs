use super::*;
use crate::sample::uniform_points;
use nalgebra::vector;
use proptest::prelude::*;

fn sorted(points: &[Point]) -> Vec<(f64, f64)> {
    let mut xs: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    xs
}

#[test]
fn empty_and_single_point_are_stable() {
    let mut empty: Vec<Point> = Vec::new();
    reorder_progressive(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![vector![0.25, 0.75]];
    reorder_progressive(&mut one);
    assert_eq!(one, vec![vector![0.25, 0.75]]);
}

#[test]
fn self_term_is_one() {
    let pts = vec![vector![0.3, 0.3]];
    let e = point_energy(&pts, 0, 0, EnergyCfg::default());
    assert!((e - 1.0).abs() < 1e-15);
}

#[test]
fn energy_only_counts_the_remainder() {
    let pts = vec![vector![0.1, 0.1], vector![0.1, 0.1], vector![0.6, 0.6]];
    let cfg = EnergyCfg::default();
    // Candidate 1 against [1, 3): itself plus the far point.
    let far = (-0.5f64 / 2.0).exp();
    assert!((point_energy(&pts, 1, 1, cfg) - (1.0 + far)).abs() < 1e-12);
    // Against the whole slice the coincident point adds another 1.
    assert!((point_energy(&pts, 1, 0, cfg) - (2.0 + far)).abs() < 1e-12);
}

#[test]
fn two_point_tie_keeps_first_found() {
    // Both energies are 1 + exp(-d²/2); index 0 is eliminated first, then the
    // reverse puts it last.
    let mut pts = vec![vector![0.1, 0.1], vector![0.9, 0.9]];
    reorder_progressive(&mut pts);
    assert_eq!(pts, vec![vector![0.9, 0.9], vector![0.1, 0.1]]);
}

#[test]
fn isolated_point_beats_wrapped_corner_cluster() {
    let center = vector![0.5, 0.5];
    let mut pts = vec![
        vector![0.0, 0.0],
        vector![0.0, 0.99],
        vector![0.99, 0.0],
        vector![0.99, 0.99],
        center,
    ];
    reorder_progressive(&mut pts);
    let pos = pts.iter().position(|p| *p == center).unwrap();
    assert!(pos <= 1, "center landed at {pos}: {pts:?}");
    // The corners are one cluster through the seams; the center leads.
    assert_eq!(pts[0], center);
}

#[test]
fn most_crowded_point_goes_last() {
    let iso = vector![0.5, 0.5];
    let a = vector![0.1, 0.1];
    let b = vector![0.11, 0.1];
    let mut pts = vec![iso, a, b];
    reorder_progressive(&mut pts);
    // `b` sits slightly closer to `iso`, so it is the most crowded point.
    assert_eq!(pts, vec![iso, a, b]);
}

#[test]
fn nan_point_does_not_steal_finalized_slots() {
    let mut pts = vec![vector![0.2, 0.2], vector![f64::NAN, 0.4], vector![0.7, 0.7]];
    let before = pts.len();
    reorder_progressive(&mut pts);
    assert_eq!(pts.len(), before);
    assert_eq!(pts.iter().filter(|p| p.x.is_nan()).count(), 1);
}

#[test]
fn wider_kernel_is_still_a_permutation() {
    let input = uniform_points(40, 11);
    let mut pts = input.clone();
    reorder_progressive_with(&mut pts, EnergyCfg { sigma: 0.05 });
    assert_eq!(sorted(&pts), sorted(&input));
}

fn point_vec(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 0..max)
        .prop_map(|xs| xs.into_iter().map(|(x, y)| vector![x, y]).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_is_a_permutation(input in point_vec(24)) {
        let mut pts = input.clone();
        reorder_progressive(&mut pts);
        prop_assert_eq!(sorted(&pts), sorted(&input));
    }

    #[test]
    fn output_is_deterministic(input in point_vec(24)) {
        let mut first = input.clone();
        let mut second = input;
        reorder_progressive(&mut first);
        reorder_progressive(&mut second);
        prop_assert_eq!(first, second);
    }
}
