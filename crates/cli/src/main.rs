use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

use blueseq::EnergyCfg;

mod batch;
mod provenance;

use batch::{reorder_file, run_batch, BatchCfg, OutputFlags};

#[derive(Parser)]
#[command(name = "blueseq")]
#[command(about = "Turn blue-noise point sets into progressive sequences")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Process an indexed range of point-set files
    Run(RunArgs),
    /// Reorder one point-set file into one sequence text file
    Reorder {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1.0)]
        sigma: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct RunArgs {
    /// Input filename template; `{}` is replaced by the file index
    #[arg(long, default_value = "BNOT/ours_init_ps_1024pts_{}.dat")]
    input: String,
    /// Output directory (created if absent)
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
    #[arg(long, default_value_t = 1)]
    first: u64,
    #[arg(long, default_value_t = 1)]
    last: u64,
    /// Image side length in pixels
    #[arg(long, default_value_t = 128)]
    resolution: u32,
    /// Gaussian energy width
    #[arg(long, default_value_t = 1.0)]
    sigma: f64,
    /// Emit per-prefix frames of the unordered input set
    #[arg(long)]
    set_images: bool,
    /// Skip per-prefix frames of the sequence
    #[arg(long)]
    no_sequence_images: bool,
    /// Skip the sequence text file
    #[arg(long)]
    no_sequence_text: bool,
    /// Skip the provenance sidecar
    #[arg(long)]
    no_provenance: bool,
    /// Draw every point black, including the newest one
    #[arg(long)]
    no_highlight: bool,
}

impl From<RunArgs> for BatchCfg {
    fn from(a: RunArgs) -> Self {
        Self {
            input: a.input,
            out_dir: a.out_dir,
            first: a.first,
            last: a.last,
            resolution: a.resolution,
            highlight_latest: !a.no_highlight,
            sigma: a.sigma,
            outputs: OutputFlags {
                write_set_image: a.set_images,
                write_sequence_image: !a.no_sequence_images,
                write_sequence_text: !a.no_sequence_text,
                write_provenance: !a.no_provenance,
            },
            ..BatchCfg::default()
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(args.into()),
        Action::Reorder { input, out, sigma } => reorder(input, out, sigma),
        Action::Report => report(),
    }
}

fn run(cfg: BatchCfg) -> Result<()> {
    tracing::info!(
        input = %cfg.input,
        out_dir = %cfg.out_dir.display(),
        first = cfg.first,
        last = cfg.last,
        "run"
    );
    let reports = run_batch(&cfg)?;
    for r in &reports {
        tracing::info!(
            index = r.index,
            input = %r.input.display(),
            points = r.points,
            outputs = r.outputs.len(),
            "processed"
        );
    }
    let written: usize = reports.iter().map(|r| r.outputs.len()).sum();
    tracing::info!(files = reports.len(), written, "done");
    Ok(())
}

fn reorder(input: PathBuf, out: PathBuf, sigma: f64) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), sigma, "reorder");
    let points = reorder_file(&input, &out, EnergyCfg { sigma })?;
    tracing::info!(points, "done");
    Ok(())
}

fn report() -> Result<()> {
    let defaults = serde_json::to_value(BatchCfg::default())?;
    let obj = serde_json::json!({
        "tool": { "name": "blueseq", "version": blueseq::VERSION },
        "code_rev": provenance::current_git_rev(),
        "defaults": defaults,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn run_defaults_match_batch_defaults() {
        let cmd = Cmd::try_parse_from(["blueseq", "run"]).unwrap();
        let Action::Run(args) = cmd.action else {
            panic!("expected run");
        };
        let cfg = BatchCfg::from(args);
        let defaults = BatchCfg::default();
        assert_eq!(cfg.input, defaults.input);
        assert_eq!(cfg.out_dir, defaults.out_dir);
        assert_eq!((cfg.first, cfg.last), (1, 1));
        assert_eq!(cfg.resolution, 128);
        assert!(cfg.highlight_latest);
        assert_eq!(cfg.outputs, OutputFlags::default());
    }

    #[test]
    fn run_flags_toggle_outputs() {
        let cmd = Cmd::try_parse_from([
            "blueseq",
            "run",
            "--first",
            "1",
            "--last",
            "10",
            "--set-images",
            "--no-sequence-images",
            "--no-provenance",
        ])
        .unwrap();
        let Action::Run(args) = cmd.action else {
            panic!("expected run");
        };
        let cfg = BatchCfg::from(args);
        assert_eq!(cfg.last, 10);
        assert!(cfg.outputs.write_set_image);
        assert!(!cfg.outputs.write_sequence_image);
        assert!(cfg.outputs.write_sequence_text);
        assert!(!cfg.outputs.write_provenance);
    }
}
