//! Progressive blue-noise sequencing on the unit torus.
//!
//! A blue-noise *set* has no meaningful order. This crate turns one into a
//! *sequence* whose every prefix is itself well distributed, by repeatedly
//! eliminating the most crowded point (a void-and-cluster step) and reading the
//! elimination order backwards.
//!
//! Layout
//! - `torus`: wrap-around distance on [0, 1)².
//! - `reorder`: the energy elimination pass.
//! - `io`: coordinate text in/out.
//! - `raster`: prefix bitmaps and PNG output.
//! - `template`: checked `{}` filename templates.
//! - `sample`: seeded point sets and a prefix spacing metric.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; the `cli`
//!   crate is the only consumer.

pub mod error;
pub mod io;
pub mod raster;
pub mod reorder;
pub mod sample;
pub mod template;
pub mod torus;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use reorder::{reorder_progressive, reorder_progressive_with, EnergyCfg};
pub use torus::{distance_wrap, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::io::{parse_points, read_points, write_points, write_sequence_text};
    pub use crate::raster::{pixel_index, render_prefix, write_prefix_png, RasterCfg};
    pub use crate::reorder::{point_energy, reorder_progressive, reorder_progressive_with, EnergyCfg};
    pub use crate::template::PathTemplate;
    pub use crate::torus::{distance_wrap, distance_wrap_sq, Point};
    pub use crate::{Error, Result};
}
