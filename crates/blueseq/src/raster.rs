//! Prefix rasterization.
//!
//! A prefix of a sequence is drawn into a square RGB8 bitmap: white
//! background, black points, and (optionally) the newest point of the prefix
//! in red, so a series of frames shows where each point lands.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{Error, Result};
use crate::torus::Point;

/// Largest accepted image side; keeps `size² · 3` comfortably addressable.
pub const MAX_SIZE: u32 = 16_384;

const BACKGROUND: [u8; 3] = [255, 255, 255];
const POINT: [u8; 3] = [0, 0, 0];
const LATEST: [u8; 3] = [255, 0, 0];

/// Raster configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterCfg {
    /// Side length in pixels.
    pub size: u32,
    /// Draw the last point of the prefix in red.
    pub highlight_latest: bool,
}

impl Default for RasterCfg {
    fn default() -> Self {
        Self {
            size: 128,
            highlight_latest: true,
        }
    }
}

impl RasterCfg {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_SIZE {
            return Err(Error::InvalidRaster {
                reason: format!("size {} outside 1..={MAX_SIZE}", self.size),
            });
        }
        Ok(())
    }
}

/// Pixel column/row for a coordinate: `floor(coord · size)` clamped to
/// `[0, size − 1]`. Negative and NaN coordinates land on 0.
#[inline]
pub fn pixel_index(coord: f64, size: u32) -> usize {
    let last = size.saturating_sub(1) as usize;
    // Float-to-int `as` saturates and maps NaN to 0.
    ((coord * f64::from(size)) as usize).min(last)
}

/// Row-major RGB8 pixels of `prefix`. Later points overwrite earlier ones
/// sharing a pixel. Fails for sizes outside `1..=MAX_SIZE`.
pub fn render_prefix(prefix: &[Point], cfg: RasterCfg) -> Result<Vec<u8>> {
    cfg.validate()?;
    let size = cfg.size as usize;
    let mut pixels = BACKGROUND.repeat(size * size);
    for (k, p) in prefix.iter().enumerate() {
        let x = pixel_index(p.x, cfg.size);
        let y = pixel_index(p.y, cfg.size);
        let color = if cfg.highlight_latest && k + 1 == prefix.len() {
            LATEST
        } else {
            POINT
        };
        let at = (y * size + x) * 3;
        pixels[at..at + 3].copy_from_slice(&color);
    }
    Ok(pixels)
}

/// Render `prefix` and encode it as PNG at `path`.
pub fn write_prefix_png(path: impl AsRef<Path>, prefix: &[Point], cfg: RasterCfg) -> Result<()> {
    let path = path.as_ref();
    let pixels = render_prefix(prefix, cfg)?;
    let file = File::create(path).map_err(|e| Error::io(path, e))?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), cfg.size, cfg.size);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let encode = |source| Error::Encode {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = encoder.write_header().map_err(encode)?;
    writer.write_image_data(&pixels).map_err(encode)?;
    writer.finish().map_err(encode)
}
