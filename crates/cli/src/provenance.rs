use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to a sequence file.
pub struct Payload {
    pub params: Value,
    pub outputs: Vec<PathBuf>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            outputs: Vec::new(),
        }
    }

    pub fn with_outputs(mut self, outputs: Vec<PathBuf>) -> Self {
        self.outputs = outputs;
        self
    }
}

/// Write `<artifact stem>.provenance.json` with the tool version, git commit,
/// params and outputs. The artifact itself need not exist.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let outputs: Vec<String> = payload
        .outputs
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let doc = json!({
        "tool": { "name": "blueseq", "version": blueseq::VERSION },
        "code_rev": current_git_rev(),
        "params": payload.params,
        "outputs": outputs,
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `dir/BNOT_3.txt` → `dir/BNOT_3.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .unwrap_or_else(|| OsStr::new("sequence"))
        .to_os_string();
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash: `GIT_COMMIT` baked in at build time, else `GIT_COMMIT` at run
/// time, else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| Some(s.trim().to_string()).filter(|s| !s.is_empty());
    option_env!("GIT_COMMIT")
        .and_then(|s| non_empty(s.to_string()))
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8(out.stdout).ok())
                .flatten()
                .and_then(non_empty)
        })
        .unwrap_or_else(|| "unknown".to_string())
}
