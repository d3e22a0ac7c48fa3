//! Coordinate text files.
//!
//! Input: whitespace/newline-separated floats taken two at a time as (x, y).
//! Reading stops at the first token that is not a number; a dangling odd
//! token is dropped. Output: one `"x, y"` line per point, six fractional
//! digits.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::torus::Point;

/// Parse coordinate pairs from raw file bytes. Never fails; malformed input,
/// including bytes that are not UTF-8, simply ends the read early.
pub fn parse_points(input: impl AsRef<[u8]>) -> Vec<Point> {
    let floats: Vec<f64> = input
        .as_ref()
        .split(u8::is_ascii_whitespace)
        .filter(|tok| !tok.is_empty())
        .map_while(|tok| std::str::from_utf8(tok).ok()?.parse::<f64>().ok())
        .collect();
    floats
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect()
}

/// Load a point set from `path`.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(parse_points(bytes))
}

/// Serialize `points` as `"x, y"` lines.
pub fn write_points<W: Write>(mut w: W, points: &[Point]) -> std::io::Result<()> {
    for p in points {
        writeln!(w, "{:.6}, {:.6}", p.x, p.y)?;
    }
    w.flush()
}

/// Write the final sequence to `path`, replacing any existing file.
pub fn write_sequence_text(path: impl AsRef<Path>, points: &[Point]) -> Result<()> {
    let path = path.as_ref();
    File::create(path)
        .and_then(|f| write_points(BufWriter::new(f), points))
        .map_err(|e| Error::io(path, e))
}
