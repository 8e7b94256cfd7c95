//! Console output formatting.
//!
//! Each line the tool prints has a `format_*` function (pure, no I/O) and,
//! where the binary needs it, a thin `print_*` wrapper that writes to
//! stdout. Workers never call these directly: job events reach the binary's
//! printer thread over a channel (see [`run`](crate::run)) and are formatted
//! there, one line per event.
//!
//! ```text
//! Current directory: /home/me/shots.
//! '/home/me/shots/a/photo1.jpg' processed.
//! Cannot process '/home/me/shots/a/broken.jpg': Failed to decode …
//! All 3 files processed.
//! 2 written, 1 failed.
//! ```

use crate::run::{JobEvent, RunSummary};
use std::path::Path;

/// Format one job event as its console line.
pub fn format_job_event(event: &JobEvent) -> String {
    match event {
        JobEvent::Written { source } => format!("'{}' processed.", source.display()),
        JobEvent::Failed { source, message } => {
            format!("Cannot process '{}': {}.", source.display(), message)
        }
    }
}

/// Format the end-of-run summary.
///
/// The first line always reports the discovered-file count. A breakdown
/// line follows only when some job failed or was skipped — on an all-clean
/// run the count alone says everything.
pub fn format_summary(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![format!("All {} files processed.", summary.discovered)];
    if summary.failed > 0 || summary.skipped > 0 {
        let mut parts = vec![format!("{} written", summary.written)];
        if summary.failed > 0 {
            parts.push(format!("{} failed", summary.failed));
        }
        if summary.skipped > 0 {
            parts.push(format!("{} skipped", summary.skipped));
        }
        lines.push(format!("{}.", parts.join(", ")));
    }
    lines
}

/// Format the startup line naming the working directory.
pub fn format_current_dir(dir: &Path) -> String {
    format!("Current directory: {}.", dir.display())
}

pub fn print_summary(summary: &RunSummary) {
    for line in format_summary(summary) {
        println!("{line}");
    }
}
