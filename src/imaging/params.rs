//! Parameter types for thumbnail operations.
//!
//! These structs describe *what* to produce, not *how*. They are the
//! interface between the [`cache`](crate::cache) (which decides when a
//! thumbnail is needed) and the [`backend`](super::backend) (which does the
//! pixel work), so a mock backend can stand in during tests.
//!
//! ## Types
//!
//! - [`Quality`]: Lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`ThumbnailParams`]: Target box and quality for one thumbnail.

/// Quality setting for lossy image encoding (1-100).
///
/// Only JPEG output honours it; PNG and GIF are always written at full fidelity.
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
        Self(90)
    }
}

/// Target box for a crop-to-fill thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailParams {
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}

impl Default for ThumbnailParams {
    fn default() -> Self {
        Self {
            width: 250,
            height: 250,
            quality: Quality::default(),
        }
    }
}
