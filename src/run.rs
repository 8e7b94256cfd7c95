//! Batch execution: fan jobs out over the worker pool and tally outcomes.
//!
//! Discovery happens first and is fatal on failure; after that every job is
//! independent. Jobs run on whatever rayon pool is current — the binary
//! builds the global pool from [`effective_threads`](crate::config::effective_threads),
//! and tests pin a single-thread pool via `ThreadPool::install` when they
//! need deterministic ordering.
//!
//! Workers never print. Each job's result is reported as a [`JobEvent`] over
//! an mpsc channel; the binary drains the channel on a dedicated printer
//! thread so console lines cannot interleave mid-line. Skips are silent by
//! contract and produce no event.

use crate::config::RunConfig;
use crate::dispatch::{self, DispatchError};
use crate::pipeline::{self, JobOutcome};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// Per-job report emitted while the batch runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    /// The job's output was written.
    Written { source: PathBuf },
    /// The job failed; the batch continues without it.
    Failed { source: PathBuf, message: String },
}

/// Tally of a completed run.
///
/// `discovered` counts files found under the input root — the number the
/// summary line reports — while the other fields break down how their jobs
/// ended. `discovered == written + failed + skipped` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub written: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Run the full batch: discover, process every job in parallel, tally.
///
/// Returns only after every job has completed, regardless of per-job
/// success or failure. Per-job errors are absorbed here — converted to
/// [`JobEvent::Failed`] and counted, never propagated.
pub fn run(config: &RunConfig, events: Option<Sender<JobEvent>>) -> Result<RunSummary, DispatchError> {
    let jobs = dispatch::discover_jobs(config)?;
    let discovered = jobs.len();

    enum Ended {
        Written,
        Skipped,
        Failed,
    }

    let endings: Vec<Ended> = jobs
        .par_iter()
        .map(|job| match pipeline::process_job(job, config.quality) {
            Ok(JobOutcome::Written) => {
                if let Some(tx) = &events {
                    let _ = tx.send(JobEvent::Written {
                        source: job.source.clone(),
                    });
                }
                Ended::Written
            }
            // Silent by contract: no event, no output file
            Ok(JobOutcome::Skipped) => Ended::Skipped,
            Err(e) => {
                if let Some(tx) = &events {
                    let _ = tx.send(JobEvent::Failed {
                        source: job.source.clone(),
                        message: e.to_string(),
                    });
                }
                Ended::Failed
            }
        })
        .collect();

    let written = endings.iter().filter(|e| matches!(e, Ended::Written)).count();
    let skipped = endings.iter().filter(|e| matches!(e, Ended::Skipped)).count();
    let failed = endings.iter().filter(|e| matches!(e, Ended::Failed)).count();

    Ok(RunSummary {
        discovered,
        written,
        failed,
        skipped,
    })
}
