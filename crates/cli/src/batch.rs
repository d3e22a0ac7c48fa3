//! Batch driver: load → (set frames) → reorder → (sequence frames) → text.
//!
//! Files are addressed by an inclusive index range substituted into the input
//! template. Each file is processed to completion before the next one is read;
//! the first failure aborts the batch with the offending path in the context.

use anyhow::{bail, Context, Result};
use blueseq::io::{read_points, write_sequence_text};
use blueseq::raster::{write_prefix_png, RasterCfg};
use blueseq::reorder::{reorder_progressive_with, EnergyCfg};
use blueseq::template::PathTemplate;
use blueseq::Point;
use serde::{Serialize, Serializer};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::provenance::{write_sidecar, Payload};

/// Which artifacts to emit per input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OutputFlags {
    /// Frames of the original, unordered set (one per prefix length).
    pub write_set_image: bool,
    /// Frames of the progressive sequence (one per prefix length).
    pub write_sequence_image: bool,
    /// Final sequence as `"x, y"` text.
    pub write_sequence_text: bool,
    /// JSON sidecar next to the sequence text.
    pub write_provenance: bool,
}

impl Default for OutputFlags {
    fn default() -> Self {
        Self {
            write_set_image: false,
            write_sequence_image: true,
            write_sequence_text: true,
            write_provenance: true,
        }
    }
}

/// Full batch configuration. Name templates are relative to `out_dir`; the
/// input template is used as given.
#[derive(Clone, Debug, Serialize)]
pub struct BatchCfg {
    pub input: String,
    #[serde(serialize_with = "serialize_lossy_path")]
    pub out_dir: PathBuf,
    pub set_image_name: String,
    pub sequence_image_name: String,
    pub text_name: String,
    pub first: u64,
    pub last: u64,
    pub resolution: u32,
    pub highlight_latest: bool,
    pub sigma: f64,
    pub outputs: OutputFlags,
}

impl Default for BatchCfg {
    fn default() -> Self {
        Self {
            input: "BNOT/ours_init_ps_1024pts_{}.dat".into(),
            out_dir: PathBuf::from("out"),
            set_image_name: "BNOT_{}_{}.set.png".into(),
            sequence_image_name: "BNOT_{}_{}.sequence.png".into(),
            text_name: "BNOT_{}.txt".into(),
            first: 1,
            last: 1,
            resolution: 128,
            highlight_latest: true,
            sigma: 1.0,
            outputs: OutputFlags::default(),
        }
    }
}

/// Paths need not be UTF-8; the sidecar records them lossily instead of
/// failing after outputs were already written.
fn serialize_lossy_path<S: Serializer>(path: &Path, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&path.to_string_lossy())
}

impl BatchCfg {
    fn raster(&self) -> RasterCfg {
        RasterCfg {
            size: self.resolution,
            highlight_latest: self.highlight_latest,
        }
    }

    fn energy(&self) -> EnergyCfg {
        EnergyCfg { sigma: self.sigma }
    }
}

/// What one input produced.
#[derive(Clone, Debug)]
pub struct FileReport {
    pub index: u64,
    pub input: PathBuf,
    pub points: usize,
    pub outputs: Vec<PathBuf>,
}

struct Templates {
    input: PathTemplate,
    set_image: PathTemplate,
    sequence_image: PathTemplate,
    text: PathTemplate,
}

impl Templates {
    fn parse(cfg: &BatchCfg) -> Result<Self> {
        let parse = |raw: &str, slots: usize| -> Result<PathTemplate> {
            let t = PathTemplate::new(raw)?;
            if t.placeholders() != slots {
                bail!("template {raw:?} needs exactly {slots} `{{}}` placeholder(s)");
            }
            Ok(t)
        };
        Ok(Self {
            input: parse(&cfg.input, 1)?,
            set_image: parse(&cfg.set_image_name, 2)?,
            sequence_image: parse(&cfg.sequence_image_name, 2)?,
            text: parse(&cfg.text_name, 1)?,
        })
    }
}

fn check_sigma(sigma: f64) -> Result<()> {
    if !(sigma.is_finite() && sigma > 0.0) {
        bail!("sigma must be positive and finite, got {sigma}");
    }
    Ok(())
}

/// Run the whole batch. Validates the configuration before touching any file.
pub fn run_batch(cfg: &BatchCfg) -> Result<Vec<FileReport>> {
    if cfg.first > cfg.last {
        bail!("empty index range {}..={}", cfg.first, cfg.last);
    }
    check_sigma(cfg.sigma)?;
    if cfg.outputs.write_set_image || cfg.outputs.write_sequence_image {
        cfg.raster().validate()?;
    }
    let templates = Templates::parse(cfg)?;
    fs::create_dir_all(&cfg.out_dir)
        .with_context(|| format!("creating output dir {}", cfg.out_dir.display()))?;

    let mut reports = Vec::new();
    for index in cfg.first..=cfg.last {
        tracing::info!(index, last = cfg.last, "image");
        let report = process_file(cfg, &templates, index)
            .with_context(|| format!("processing file index {index}"))?;
        reports.push(report);
    }
    Ok(reports)
}

fn process_file(cfg: &BatchCfg, templates: &Templates, index: u64) -> Result<FileReport> {
    let input = templates.input.expand(&[index])?;
    tracing::info!(path = %input.display(), "reading file");
    let mut points = read_points(&input)?;
    tracing::info!(points = points.len(), "loaded");
    let mut outputs = Vec::new();

    if cfg.outputs.write_set_image {
        tracing::info!("saving set images");
        write_frames(cfg, &templates.set_image, index, &points, &mut outputs)?;
    }

    tracing::info!("making sequence");
    reorder_progressive_with(&mut points, cfg.energy());

    if cfg.outputs.write_sequence_image {
        tracing::info!("saving sequence images");
        write_frames(cfg, &templates.sequence_image, index, &points, &mut outputs)?;
    }

    let text_path = cfg.out_dir.join(templates.text.expand(&[index])?);
    if cfg.outputs.write_sequence_text {
        tracing::info!(path = %text_path.display(), "saving sequence text");
        write_sequence_text(&text_path, &points)?;
        outputs.push(text_path.clone());
    }

    if cfg.outputs.write_provenance {
        let batch = serde_json::to_value(cfg).context("serializing batch config")?;
        let payload = Payload::new(json!({
            "index": index,
            "input": input.to_string_lossy(),
            "points": points.len(),
            "batch": batch,
        }))
        .with_outputs(outputs.clone());
        let sidecar = write_sidecar(&text_path, payload)?;
        outputs.push(sidecar);
    }

    Ok(FileReport {
        index,
        input,
        points: points.len(),
        outputs,
    })
}

/// One PNG per prefix length `1..=len`; frame `k` shows `points[..=k]`.
fn write_frames(
    cfg: &BatchCfg,
    template: &PathTemplate,
    index: u64,
    points: &[Point],
    outputs: &mut Vec<PathBuf>,
) -> Result<()> {
    let raster = cfg.raster();
    for k in 0..points.len() {
        let path = cfg.out_dir.join(template.expand(&[index, k as u64])?);
        write_prefix_png(&path, &points[..=k], raster)?;
        outputs.push(path);
    }
    Ok(())
}

/// Reorder a single file into a single sequence text file.
pub fn reorder_file(input: &Path, out: &Path, energy: EnergyCfg) -> Result<usize> {
    check_sigma(energy.sigma)?;
    let mut points = read_points(input)?;
    reorder_progressive_with(&mut points, energy);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    write_sequence_text(out, &points)?;
    Ok(points.len())
}
