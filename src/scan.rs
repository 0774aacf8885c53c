//! Directory scanning.
//!
//! Lists the images a gallery shows: the regular files at the top level of the
//! data directory whose extension is on the allow-list.
//!
//! ```text
//! photos/                 # data_dir
//! ├── starboard.toml      # skipped (not an image)
//! ├── stars.json          # skipped (the star store)
//! ├── .DS_Store           # skipped (hidden)
//! ├── dawn.jpg            # ✓
//! ├── Dusk.PNG            # ✓ (extensions are case-insensitive)
//! ├── noon.gif -> ~/x.gif # ✓ (symlinks are followed; dangling ones skipped)
//! ├── old.bmp             # skipped (not on the allow-list)
//! └── thumbs/             # skipped (directory; never recursed into)
//! ```
//!
//! Results are sorted by filename so every listing has the same order.

use crate::imaging::ImageFormatTag;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read image directory {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// An image found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Filename within the data directory; the image's identity everywhere.
    pub filename: String,
    /// Full path to the source file.
    pub path: PathBuf,
    pub format: ImageFormatTag,
}

/// Scan `dir` (not recursively) for images whose extension is in `extensions`.
pub fn scan_images(dir: &Path, extensions: &[String]) -> Result<Vec<ImageFile>, ScanError> {
    let io_err = |e| ScanError::Io {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut images: Vec<ImageFile> = fs::read_dir(dir)
        .map_err(io_err)?
        .filter_map(|e| e.ok())
        .filter(|e| fs::metadata(e.path()).is_ok_and(|m| m.is_file()))
        .filter_map(|e| {
            let path = e.path();
            let filename = e.file_name().into_string().ok()?;
            if filename.starts_with('.') || !is_allowed(&path, extensions) {
                return None;
            }
            let format = ImageFormatTag::from_path(&path).ok()?;
            Some(ImageFile {
                filename,
                path,
                format,
            })
        })
        .collect();

    images.sort_by(|a, b| a.filename.cmp(&b.filename));
    debug!(dir = %dir.display(), count = images.len(), "scanned images");
    Ok(images)
}

/// Case-insensitive extension check against the allow-list.
pub fn is_allowed(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}
