//! Prefix spacing before and after reordering.
//!
//! Draws a seeded white-noise set, reorders it, and prints the closest-pair
//! distance of a few prefix lengths for both orders. The progressive order
//! should hold larger spacing for short prefixes.
//!
//! Run: `cargo run -p blueseq --example prefix_spacing --release`

use blueseq::prelude::*;
use blueseq::sample::{prefix_min_spacing, uniform_points};

fn main() {
    let set = uniform_points(256, 7);
    let mut sequence = set.clone();
    reorder_progressive(&mut sequence);

    let before = prefix_min_spacing(&set);
    let after = prefix_min_spacing(&sequence);
    println!("prefix  set_spacing  sequence_spacing");
    for k in [2usize, 4, 8, 16, 32, 64, 128, 256] {
        println!("{k:>6}  {:>11.5}  {:>16.5}", before[k - 2], after[k - 2]);
    }
}
