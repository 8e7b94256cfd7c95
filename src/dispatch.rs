//! Input tree traversal and job construction.
//!
//! Phase 1 of a run. Walks the input root recursively, mirrors every regular
//! file's path under the output root, and produces the [`Job`] list that the
//! pipeline fans out over.
//!
//! ## Path Mirroring
//!
//! A job's destination is its source with the input-root prefix replaced by
//! the output-root prefix — sub-folder structure and base name preserved —
//! and the extension rewritten to `.png`, because output is always PNG:
//!
//! ```text
//! input/a/b/shot.jpg  →  output/a/b/shot.png
//! input/cover         →  output/cover.png
//! ```
//!
//! Extension rewriting means two sources can collide (`shot.jpg` and
//! `shot.jpeg` both map to `shot.png`). This is a known limitation, not
//! guarded against: the later write wins.
//!
//! ## Symlinks
//!
//! Symlinks are not followed. A symlinked directory is not descended into
//! and a symlinked file is not a regular file, so neither produces a job.

use crate::config::RunConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Input directory '{0}' not found")]
    InputNotFound(PathBuf),
    #[error("Cannot create the output directory '{path}': {source}")]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("No file found in the input directory '{0}'")]
    NoFilesFound(PathBuf),
    #[error("Failed to read directory entry: {0}")]
    Walk(#[from] walkdir::Error),
}

/// One file's end-to-end unit of work: where to read, where to write.
///
/// A job owns nothing shared — it is created at discovery, handed to a
/// worker, and discarded when the worker finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Derive a destination path by prefix substitution + extension rewrite.
///
/// `source` must lie under `input_root` (walkdir guarantees this for
/// discovered files).
pub fn output_path(source: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    let relative = source.strip_prefix(input_root).unwrap();
    let mut dest = output_root.join(relative);
    dest.set_extension("png");
    dest
}

/// Walk the input root and build the job list.
///
/// Checks the run's preconditions in order: the input root must exist and be
/// a directory, the output root is created if absent, and at least one
/// regular file must be found at any depth. Entries are sorted by path so
/// the job list is stable across runs.
pub fn discover_jobs(config: &RunConfig) -> Result<Vec<Job>, DispatchError> {
    if !config.input_root.is_dir() {
        return Err(DispatchError::InputNotFound(config.input_root.clone()));
    }

    fs::create_dir_all(&config.output_root).map_err(|source| DispatchError::OutputCreate {
        path: config.output_root.clone(),
        source,
    })?;

    let mut jobs = Vec::new();
    for entry in WalkDir::new(&config.input_root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        jobs.push(Job {
            source: entry.path().to_path_buf(),
            dest: output_path(entry.path(), &config.input_root, &config.output_root),
        });
    }

    if jobs.is_empty() {
        return Err(DispatchError::NoFilesFound(config.input_root.clone()));
    }

    Ok(jobs)
}
