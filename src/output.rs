//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Images (2)
//! 001 dawn.jpg (JPEG)
//! 002 dusk.png (PNG)
//!
//! Data: photos/
//! Thumbnails: photos/thumbs/
//! Stars: photos/stars.json
//! ```
//!
//! ## Thumbs
//!
//! ```text
//! Thumbnails (3 images)
//!     dawn.jpg: cached
//!     dusk.png: generated
//!     noon.gif: failed (Decode failed: ...)
//! ```
//!
//! Lines arrive in completion order, not filename order: thumbnails are
//! generated in parallel.
//!
//! ## Stars
//!
//! ```text
//! 001 dawn.jpg (2 stars)
//!     alice
//!     bob
//! 002 dusk.png (0 stars)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::gallery::{WarmEvent, WarmStatus};
use crate::scan::ImageFile;
use crate::stars::StarMap;
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn dir_display(path: &Path) -> String {
    let shown = path.display().to_string();
    if shown.ends_with('/') {
        shown
    } else {
        format!("{shown}/")
    }
}

// ============================================================================
// Scan
// ============================================================================

pub fn format_scan_output(
    images: &[ImageFile],
    data_dir: &Path,
    thumbs_dir: &Path,
    store_file: &Path,
) -> Vec<String> {
    let mut lines = vec![format!("Images ({})", images.len())];
    for (i, image) in images.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            image.filename,
            image.format
        ));
    }
    lines.push(String::new());
    lines.push(format!("Data: {}", dir_display(data_dir)));
    lines.push(format!("Thumbnails: {}", dir_display(thumbs_dir)));
    lines.push(format!("Stars: {}", store_file.display()));
    lines
}

pub fn print_scan_output(
    images: &[ImageFile],
    data_dir: &Path,
    thumbs_dir: &Path,
    store_file: &Path,
) {
    for line in format_scan_output(images, data_dir, thumbs_dir, store_file) {
        println!("{}", line);
    }
}

// ============================================================================
// Thumbs
// ============================================================================

pub fn format_warm_event(event: &WarmEvent) -> Vec<String> {
    match event {
        WarmEvent::Started { image_count } => {
            vec![format!("Thumbnails ({})", plural(*image_count, "image", "images"))]
        }
        WarmEvent::Thumbnail { filename, status } => {
            let status = match status {
                WarmStatus::Cached => "cached".to_string(),
                WarmStatus::Generated => "generated".to_string(),
                WarmStatus::Failed(reason) => format!("failed ({reason})"),
            };
            vec![format!("{}{}: {}", indent(1), filename, status)]
        }
    }
}

// ============================================================================
// Stars
// ============================================================================

/// Every star record with its visitors. Empty records are listed too.
pub fn format_stars(stars: &StarMap) -> Vec<String> {
    if stars.is_empty() {
        return vec!["No stars yet".to_string()];
    }
    let mut lines = Vec::new();
    for (i, (image, visitors)) in stars.records().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            image,
            plural(visitors.len(), "star", "stars")
        ));
        for visitor in visitors {
            lines.push(format!("{}{}", indent(1), visitor));
        }
    }
    lines
}

pub fn print_stars(stars: &StarMap) {
    for line in format_stars(stars) {
        println!("{}", line);
    }
}

pub fn format_toggle(image: &str, visitor: &str, starred: bool) -> String {
    if starred {
        format!("★ {image} starred by {visitor}")
    } else {
        format!("☆ {image} unstarred by {visitor}")
    }
}

pub fn format_invalidate(image: &str, removed: bool) -> String {
    if removed {
        format!("{image}: thumbnail removed")
    } else {
        format!("{image}: no cached thumbnail")
    }
}
