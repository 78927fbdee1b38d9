//! Batch processing over a directory of landmark files
//!
//! Every file gets its own session and its own tracker. A file that fails
//! does not stop the batch; its error is kept in the report.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    JsonLinesSource, NullSink, RuntimeError, RuntimeResult, Session, SessionConfig, SessionReport,
};

/// File extensions recognized as landmark streams
pub const LANDMARK_EXTENSIONS: &[&str] = &["jsonl", "ndjson"];

/// Result of one input in a batch
#[derive(Debug)]
pub struct BatchEntry {
    pub input: PathBuf,
    pub result: RuntimeResult<SessionReport>,
}

/// Results of a whole batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Reports of the sessions that completed
    pub fn completed(&self) -> impl Iterator<Item = &SessionReport> {
        self.entries.iter().filter_map(|e| e.result.as_ref().ok())
    }

    /// Inputs that failed, with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &RuntimeError)> {
        self.entries
            .iter()
            .filter_map(|e| e.result.as_ref().err().map(|err| (e.input.as_path(), err)))
    }

    pub fn total_reps(&self) -> u64 {
        self.completed().map(|r| u64::from(r.reps())).sum()
    }
}

/// Is this path a landmark stream file?
pub fn is_landmark_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            LANDMARK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Landmark files directly inside `dir`, sorted by path
pub fn discover_inputs(dir: &Path) -> RuntimeResult<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_landmark_file(&path) {
            inputs.push(path);
        }
    }

    if inputs.is_empty() {
        return Err(RuntimeError::NoInputs(dir.to_path_buf()));
    }
    inputs.sort();
    Ok(inputs)
}

/// Session input name for a file (its stem)
pub fn input_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string())
}

/// Run one session over a landmark file
pub fn run_file(path: &Path, template: &SessionConfig) -> RuntimeResult<SessionReport> {
    let config = template.clone().with_input_name(input_name(path));
    let mut source = JsonLinesSource::open(path)?;
    Session::new(config)?.run(&mut source, &mut NullSink)
}

fn record(input: PathBuf, result: RuntimeResult<SessionReport>) -> BatchEntry {
    if let Err(e) = &result {
        tracing::error!(input = %input.display(), error = %e, "session failed");
    }
    BatchEntry { input, result }
}

/// Run every landmark file in `dir`, one after another
pub fn run_batch(dir: &Path, template: &SessionConfig) -> RuntimeResult<BatchReport> {
    let inputs = discover_inputs(dir)?;
    tracing::info!(dir = %dir.display(), inputs = inputs.len(), "batch processing");

    let entries = inputs
        .into_iter()
        .map(|input| {
            let result = run_file(&input, template);
            record(input, result)
        })
        .collect();

    Ok(BatchReport { entries })
}

/// Run every landmark file in `dir` on the rayon thread pool
///
/// Sessions share nothing, so each worker owns its tracker outright. The
/// report keeps input order.
pub fn run_batch_parallel(dir: &Path, template: &SessionConfig) -> RuntimeResult<BatchReport> {
    let inputs = discover_inputs(dir)?;
    tracing::info!(
        dir = %dir.display(),
        inputs = inputs.len(),
        threads = rayon::current_num_threads(),
        "parallel batch processing"
    );

    let entries = inputs
        .into_par_iter()
        .map(|input| {
            let result = run_file(&input, template);
            record(input, result)
        })
        .collect();

    Ok(BatchReport { entries })
}
