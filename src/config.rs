//! Run configuration — explicit values, no ambient state.
//!
//! Everything a run needs travels in a [`RunConfig`] built once from CLI
//! flags and passed by reference into [`run::run`](crate::run::run). Tests
//! construct one directly with injected temp paths.

use std::path::PathBuf;

/// Default encoding quality when `--quality` is not given.
pub const DEFAULT_QUALITY: u32 = 95;

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root of the tree to read screenshots from. Must exist.
    pub input_root: PathBuf,
    /// Root of the mirrored output tree. Created if absent.
    pub output_root: PathBuf,
    /// Maximum number of parallel workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub threads: Option<usize>,
    /// Encoding quality. Best-effort: PNG output is lossless, so this only
    /// steers compression effort (see [`pipeline`](crate::pipeline)).
    pub quality: Quality,
}

impl RunConfig {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            threads: None,
            quality: Quality::default(),
        }
    }
}

/// Quality setting for image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(DEFAULT_QUALITY)
    }
}

/// Resolve the effective worker count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &RunConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.threads.map(|n| n.min(cores)).unwrap_or(cores)
}
