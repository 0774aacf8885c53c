//! Shared test utilities for the starboard test suite.
//!
//! Synthetic images are generated in memory, so tests never depend on
//! fixture files.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_gallery(&[("dawn.jpg", 800, 600), ("notes.txt", 0, 0)]);
//! let config = config_for(tmp.path());
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::GalleryConfig;
use crate::imaging::{ImageFormatTag, Quality, codec};
use image::{DynamicImage, Rgb, RgbImage};

// =========================================================================
// Synthetic images
// =========================================================================

/// A smooth RGB gradient of the given size.
pub fn gradient(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    }))
}

/// Encode an image as PNG.
pub fn png_bytes(img: &DynamicImage) -> Vec<u8> {
    codec::encode(img, ImageFormatTag::Png, Quality::default()).unwrap()
}

/// Write a gradient to `path`, encoded according to the extension.
pub fn write_image(path: &Path, width: u32, height: u32) {
    let format = ImageFormatTag::from_path(path).unwrap();
    let bytes = codec::encode(&gradient(width, height), format, Quality::default()).unwrap();
    std::fs::write(path, bytes).unwrap();
}

// =========================================================================
// Gallery setup
// =========================================================================

/// Create a temp data directory.
///
/// Entries with a supported image extension get a real image of the given
/// size; anything else gets a few bytes of text.
pub fn setup_gallery(files: &[(&str, u32, u32)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, width, height) in files {
        let path = tmp.path().join(name);
        if ImageFormatTag::from_path(&path).is_ok() {
            write_image(&path, *width, *height);
        } else {
            std::fs::write(&path, b"not an image").unwrap();
        }
    }
    tmp
}

/// Stock config pointing at `data_dir`.
pub fn config_for(data_dir: &Path) -> GalleryConfig {
    GalleryConfig {
        data_dir: data_dir.to_path_buf(),
        ..GalleryConfig::default()
    }
}
