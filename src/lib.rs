//! # shotfit
//!
//! Batch-resize every image under an input directory tree into a mirrored
//! output tree, forcing each image to one of two fixed App Store 5.5-inch
//! screenshot sizes chosen by orientation:
//!
//! - landscape (width > height): **2208×1242**
//! - portrait or square: **1242×2208**
//!
//! The resize is a forced stretch to exactly those dimensions — never a
//! proportional scale. Output is always PNG, regardless of input format.
//!
//! # Architecture: Discover, Then Fan Out
//!
//! A run has exactly two phases:
//!
//! ```text
//! 1. Dispatch   input/   →  Vec<Job>        (walk tree, mirror paths)
//! 2. Pipeline   Job      →  output/…/*.png  (decode → resize → encode → write)
//! ```
//!
//! Every [`Job`](dispatch::Job) is an independent unit of work: it owns its
//! decode buffers, writes to its own destination path, and shares nothing
//! with sibling jobs. That independence is what makes the fan-out trivial:
//! jobs run on a rayon worker pool with no ordering guarantees and no
//! cross-job error propagation. A corrupt file costs exactly one output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dispatch`] | Walks the input tree, derives mirrored output paths, builds the job list |
//! | [`pipeline`] | Per-file work: decode, orientation-based sizing, Lanczos3 resample, PNG encode |
//! | [`run`] | Ties the two together on the rayon pool and tallies outcomes |
//! | [`config`] | [`RunConfig`](config::RunConfig) passed explicitly into every entry point |
//! | [`output`] | Console line formatting — pure `format_*` functions plus `print` wrappers |
//!
//! # Design Decisions
//!
//! ## PNG-Only Output
//!
//! All outputs are PNG, and the destination path's extension is rewritten to
//! `.png` whatever the source extension was. App Store Connect accepts PNG
//! for every slot, and a single lossless format means the forced stretch is
//! the only quality decision in the tool.
//!
//! ## Forced Resize, Not Proportional
//!
//! Store screenshot slots demand exact pixel dimensions. Proportional scaling
//! would leave rounding slack and letterboxed uploads, so
//! [`pipeline::target_dimensions`] picks one of the two fixed sizes and
//! `resize_exact` stretches to it. Lanczos3 keeps the stretch as clean as a
//! one-shot batch tool can afford.
//!
//! ## Pure-Rust Imaging
//!
//! Decode and encode go through the `image` crate (JPEG, PNG, TIFF and WebP
//! decoders compiled in; format sniffed from file content, not extension).
//! No ImageMagick, no system libraries: the binary is self-contained.
//!
//! ## Failure Is Per-File
//!
//! Fatal errors (missing input root, uncreatable output root, empty tree)
//! halt the run before any file is touched. Everything after that is caught
//! at the job boundary: a failed file is logged and skipped, sibling jobs
//! proceed, and the process still exits 0 with its summary line.

pub mod config;
pub mod dispatch;
pub mod output;
pub mod pipeline;
pub mod run;

#[cfg(test)]
pub(crate) mod test_helpers;
