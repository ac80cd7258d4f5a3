// ============================================================
// Layer 6 — Results Writer
// ============================================================
// Appends the validation accuracy of a checkpoint to a plain
// text file so repeated evaluations build up a history.
//
// The file location is derived from the checkpoint path:
//
//   runs/exp1/checkpoints/topic_cnn_best.mpk.gz
//        │         │              │
//        │         └── dropped    └── file name
//        ▼
//   runs/exp1/results/val_acc_topic_cnn_best.mpk.gz.txt
//
// Each evaluation appends one line:
//   val acc: 87.1234
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::metrics::EvalReport;

/// `<checkpoint dir's parent>/results/val_acc_<checkpoint file name>.txt`
pub fn results_path_for(checkpoint: &Path) -> Result<PathBuf> {
    let model_name = checkpoint
        .file_name()
        .with_context(|| format!("Checkpoint path '{}' has no file name", checkpoint.display()))?
        .to_string_lossy();

    let root = checkpoint
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));

    Ok(root.join("results").join(format!("val_acc_{model_name}.txt")))
}

pub struct ResultsWriter {
    path: PathBuf,
}

impl ResultsWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_checkpoint(checkpoint: &Path) -> Result<Self> {
        Ok(Self::new(results_path_for(checkpoint)?))
    }

    /// Append the report's accuracy line, creating the results
    /// directory on first use.
    pub fn append(&self, report: &EvalReport) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create '{}'", dir.display()))?;
        }

        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Cannot open results file '{}'", self.path.display()))?;

        writeln!(f, "{}", report.accuracy_line())?;

        tracing::info!("Appended result to '{}'", self.path.display());
        Ok(())
    }
}
