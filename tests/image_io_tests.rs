//! # Image I/O Tests
//!
//! File round trips between the decoding collaborator, the analyzer and the
//! visualization writer.

mod test_helpers;

use seasoning_coverage::image_io::{decode_image, encode_png, load_image, save_visualization};
use seasoning_coverage::{analyze, AppError, CoverageReport};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};
use test_helpers::*;

#[test]
fn test_analyze_file_and_save_visualization() {
    let dir = tempdir().expect("temp dir should be created");
    let input_path = dir.path().join("chip.png");
    let output_path = dir.path().join("chip_coverage.png");

    chip_image(RED)
        .save(&input_path)
        .expect("input image should be written");

    let image = load_image(&input_path).expect("input image should load");
    let result = analyze(&image);
    save_visualization(&output_path, &result.visualization).expect("visualization should be saved");

    let written = load_image(&output_path).expect("visualization should load");
    assert_eq!(written, result.visualization);

    let report = CoverageReport::from_analysis(&result);
    assert!(report.triangle_found);
    assert!(report.coverage > 99.0);
}

#[test]
fn test_load_missing_file_is_filesystem_error() {
    let dir = tempdir().expect("temp dir should be created");
    let missing = dir.path().join("nope.png");

    assert!(matches!(load_image(&missing), Err(AppError::FileSystem(_))));
}

#[test]
fn test_load_corrupt_file_is_decode_error() {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(b"\x89PNG\r\n\x1a\nthis is not really a png")
        .expect("temp file should be written");

    assert!(matches!(load_image(file.path()), Err(AppError::ImageDecode(_))));
}

#[test]
fn test_unknown_output_extension_is_rejected() {
    let dir = tempdir().expect("temp dir should be created");
    let path = dir.path().join("result.unknown");

    let err = save_visualization(&path, &plate(4, 4)).expect_err("unknown extension should fail");
    assert!(matches!(err, AppError::Validation(_)));
    assert!(!path.exists());
}

#[test]
fn test_save_into_missing_directory_is_filesystem_error() {
    let dir = tempdir().expect("temp dir should be created");
    let path = dir.path().join("missing").join("result.png");

    let err = save_visualization(&path, &plate(4, 4)).expect_err("missing directory should fail");
    assert!(matches!(err, AppError::FileSystem(_)), "err = {:?}", err);
}

#[test]
fn test_no_triangle_round_trip_returns_input_pixels() {
    let image = plate(64, 48);
    let bytes = encode_png(&image).expect("PNG encoding should succeed");

    let decoded = decode_image(&bytes).expect("PNG decoding should succeed");
    let result = analyze(&decoded);

    assert!(!result.triangle_found());
    assert_eq!(result.visualization, image);
}
