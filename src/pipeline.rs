//! Per-file processing: decode → size → resample → encode → write.
//!
//! Phase 2 of a run, executed once per [`Job`] on a worker. Every step's
//! failure surfaces as a [`PipelineError`] that the caller absorbs at the
//! job boundary — nothing here aborts the batch.
//!
//! ## Crate mapping
//!
//! | Step | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Resample | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode | `image::codecs::png::PngEncoder` |
//!
//! Decoding sniffs the format from the file's leading bytes, not its
//! extension, so a JPEG named `shot.png` still decodes as JPEG.

use crate::config::Quality;
use crate::dispatch::Job;
use image::codecs::png;
use image::imageops::FilterType;
use image::{ImageError, ImageReader};
use std::fs;
use std::io::BufWriter;
use std::path::PathBuf;
use thiserror::Error;

/// Long side of the App Store 5.5-inch screenshot slot, in pixels.
pub const TARGET_LONG_SIDE: u32 = 2208;
/// Short side of the App Store 5.5-inch screenshot slot, in pixels.
pub const TARGET_SHORT_SIDE: u32 = 1242;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {0}: {1}")]
    Decode(PathBuf, ImageError),
    #[error("Failed to encode {0}: {1}")]
    Encode(PathBuf, ImageError),
}

/// Terminal state of a successfully completed job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// The resized PNG was written to the job's destination.
    Written,
    /// The source decoded to an empty bitmap; no output was produced.
    Skipped,
}

/// Pick the fixed target size by source orientation.
///
/// Landscape sources (width > height) map to 2208×1242; portrait and square
/// sources map to 1242×2208. The source aspect ratio plays no further role:
/// the resample stretches to exactly these dimensions.
pub fn target_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width > height {
        (TARGET_LONG_SIDE, TARGET_SHORT_SIDE)
    } else {
        (TARGET_SHORT_SIDE, TARGET_LONG_SIDE)
    }
}

/// Run one job end to end.
///
/// Ensures the destination's parent directory chain, decodes the source,
/// stretches it to the orientation's target size with Lanczos3, and writes
/// the PNG. A source that decodes to a zero-dimension bitmap is skipped
/// silently: `Ok(Skipped)`, no output file.
pub fn process_job(job: &Job, quality: Quality) -> Result<JobOutcome, PipelineError> {
    if let Some(parent) = job.dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let original = ImageReader::open(&job.source)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| PipelineError::Decode(job.source.clone(), e))?;

    if original.width() == 0 || original.height() == 0 {
        return Ok(JobOutcome::Skipped);
    }

    let (width, height) = target_dimensions(original.width(), original.height());
    let resized = original.resize_exact(width, height, FilterType::Lanczos3);

    let file = fs::File::create(&job.dest)?;
    let writer = BufWriter::new(file);
    let encoder =
        png::PngEncoder::new_with_quality(writer, compression_for(quality), png::FilterType::Adaptive);
    resized
        .write_with_encoder(encoder)
        .map_err(|e| PipelineError::Encode(job.dest.clone(), e))?;

    Ok(JobOutcome::Written)
}

/// Map the quality knob onto PNG compression effort.
///
/// PNG is lossless, so quality cannot change the pixels; it only buys
/// smaller files for more CPU. Best-effort semantics by contract.
fn compression_for(quality: Quality) -> png::CompressionType {
    match quality.value() {
        90.. => png::CompressionType::Best,
        50..90 => png::CompressionType::Default,
        _ => png::CompressionType::Fast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_jpeg, create_test_png};
    use tempfile::TempDir;

    // =========================================================================
    // Target sizing
    // =========================================================================

    #[test]
    fn landscape_maps_to_wide_target() {
        assert_eq!(target_dimensions(4000, 3000), (2208, 1242));
    }

    #[test]
    fn portrait_maps_to_tall_target() {
        assert_eq!(target_dimensions(1000, 2000), (1242, 2208));
    }

    #[test]
    fn square_maps_to_tall_target() {
        assert_eq!(target_dimensions(500, 500), (1242, 2208));
    }

    #[test]
    fn extreme_aspect_still_maps_to_fixed_size() {
        // Forced stretch: the original ratio never leaks into the target
        assert_eq!(target_dimensions(10_000, 10), (2208, 1242));
        assert_eq!(target_dimensions(10, 10_000), (1242, 2208));
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    #[test]
    fn landscape_jpeg_written_at_exact_target_size() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("shot.jpg");
        create_test_jpeg(&source, 400, 300);

        let job = Job {
            source,
            dest: tmp.path().join("out/shot.png"),
        };
        let outcome = process_job(&job, Quality::default()).unwrap();
        assert_eq!(outcome, JobOutcome::Written);

        let written = image::open(&job.dest).unwrap();
        assert_eq!((written.width(), written.height()), (2208, 1242));
    }

    #[test]
    fn portrait_png_written_at_exact_target_size() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("shot.png");
        create_test_png(&source, 300, 400);

        let job = Job {
            source,
            dest: tmp.path().join("out/shot.png"),
        };
        process_job(&job, Quality::default()).unwrap();

        let written = image::open(&job.dest).unwrap();
        assert_eq!((written.width(), written.height()), (1242, 2208));
    }

    #[test]
    fn destination_directory_chain_is_created() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("shot.jpg");
        create_test_jpeg(&source, 100, 80);

        let job = Job {
            source,
            dest: tmp.path().join("a/b/c/shot.png"),
        };
        process_job(&job, Quality::default()).unwrap();
        assert!(job.dest.exists());
    }

    #[test]
    fn format_is_sniffed_from_content_not_extension() {
        let tmp = TempDir::new().unwrap();
        // JPEG bytes behind a .png name
        let source = tmp.path().join("mislabeled.png");
        create_test_jpeg(&source, 320, 200);

        let job = Job {
            source,
            dest: tmp.path().join("out/mislabeled.png"),
        };
        let outcome = process_job(&job, Quality::default()).unwrap();
        assert_eq!(outcome, JobOutcome::Written);
    }

    #[test]
    fn corrupt_source_is_decode_error() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("garbage.jpg");
        fs::write(&source, b"definitely not an image").unwrap();

        let job = Job {
            source,
            dest: tmp.path().join("out/garbage.png"),
        };
        let result = process_job(&job, Quality::default());
        assert!(matches!(result, Err(PipelineError::Decode(_, _))));
        assert!(!job.dest.exists());
    }

    #[test]
    fn missing_source_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let job = Job {
            source: tmp.path().join("absent.jpg"),
            dest: tmp.path().join("out/absent.png"),
        };
        let result = process_job(&job, Quality::default());
        assert!(matches!(result, Err(PipelineError::Io(_))));
    }

    #[test]
    fn compression_tiers_follow_quality() {
        assert!(matches!(
            compression_for(Quality::new(95)),
            png::CompressionType::Best
        ));
        assert!(matches!(
            compression_for(Quality::new(70)),
            png::CompressionType::Default
        ));
        assert!(matches!(
            compression_for(Quality::new(10)),
            png::CompressionType::Fast
        ));
    }
}
