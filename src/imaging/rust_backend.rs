//! Pure Rust thumbnail backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, GIF) | `image::load_from_memory_with_format` |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode | `JpegEncoder` (quality), `PngEncoder` (best compression), GIF |

use super::backend::{ImageBackend, ImagingError};
use super::codec::{self, ImageFormatTag};
use super::generator;
use super::params::ThumbnailParams;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn thumbnail(
        &self,
        source: &[u8],
        format: ImageFormatTag,
        params: &ThumbnailParams,
    ) -> Result<Vec<u8>, ImagingError> {
        let raster = generator::generate(source, format, params.width, params.height)?;
        codec::encode(&raster, format, params.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Quality;
    use crate::test_helpers::gradient;

    #[test]
    fn thumbnail_keeps_source_format() {
        let backend = RustBackend::new();
        let params = ThumbnailParams {
            width: 120,
            height: 80,
            quality: Quality::new(85),
        };
        for format in [
            ImageFormatTag::Jpeg,
            ImageFormatTag::Png,
            ImageFormatTag::Gif,
        ] {
            let source = codec::encode(&gradient(400, 300), format, Quality::new(90)).unwrap();
            let out = backend.thumbnail(&source, format, &params).unwrap();
            let decoded = codec::decode(&out, format).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (120, 80), "{format}");
        }
    }

    #[test]
    fn thumbnail_of_corrupt_source_errors() {
        let backend = RustBackend::new();
        let result = backend.thumbnail(
            b"\xff\xd8 truncated",
            ImageFormatTag::Jpeg,
            &ThumbnailParams::default(),
        );
        assert!(matches!(result, Err(ImagingError::Decode(_))));
    }
}
