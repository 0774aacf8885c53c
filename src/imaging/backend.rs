//! Image processing backend trait and shared error type.
//!
//! The [`ImageBackend`] trait is the seam between the thumbnail
//! [`cache`](crate::cache) and the pixel work. The production implementation
//! is [`RustBackend`](super::rust_backend::RustBackend), which decodes with
//! [`codec`](super::codec), crops and resamples with
//! [`generator`](super::generator), and encodes back to the source format.
//! Tests swap in a mock that records calls instead.

use super::codec::ImageFormatTag;
use super::params::ThumbnailParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("Unsupported image format: {0:?}")]
    UnsupportedFormat(String),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Trait for thumbnail backends.
///
/// Input and output are encoded bytes so the backend owns the whole
/// decode → crop/resize → encode chain and the cache only deals with files.
pub trait ImageBackend: Sync {
    /// Render a crop-to-fill thumbnail of `source`, encoded in the same format.
    fn thumbnail(
        &self,
        source: &[u8],
        format: ImageFormatTag,
        params: &ThumbnailParams,
    ) -> Result<Vec<u8>, ImagingError>;
}
