//! Decode and encode for the formats the gallery accepts.
//!
//! | Format | Extensions | Encoder settings |
//! |---|---|---|
//! | JPEG | `jpg`, `jpeg` | [`Quality`] honoured |
//! | PNG | `png` | best compression, lossless |
//! | GIF | `gif` | quality ignored, first frame only |
//!
//! Everything here is a pure in-memory transform: bytes in, raster out, and
//! back. File I/O belongs to the [`cache`](crate::cache).

use super::backend::ImagingError;
use super::params::Quality;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{DynamicImage, ImageFormat};
use std::fmt;
use std::io::Cursor;
use std::path::Path;

/// Source format, inferred from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormatTag {
    Jpeg,
    Png,
    Gif,
}

const EXTENSIONS: &[(&str, ImageFormatTag)] = &[
    ("jpg", ImageFormatTag::Jpeg),
    ("jpeg", ImageFormatTag::Jpeg),
    ("png", ImageFormatTag::Png),
    ("gif", ImageFormatTag::Gif),
];

/// Every extension the codec can decode, lowercase.
pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
    EXTENSIONS.iter().map(|(ext, _)| *ext)
}

impl ImageFormatTag {
    /// Resolve a file extension (without the dot, any case).
    pub fn from_extension(ext: &str) -> Result<Self, ImagingError> {
        EXTENSIONS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            .map(|(_, tag)| *tag)
            .ok_or_else(|| ImagingError::UnsupportedFormat(ext.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self, ImagingError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::Gif => ImageFormat::Gif,
        }
    }
}

impl fmt::Display for ImageFormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
        };
        f.write_str(name)
    }
}

/// Decode `bytes` as `format`. The format is trusted, not sniffed.
pub fn decode(bytes: &[u8], format: ImageFormatTag) -> Result<DynamicImage, ImagingError> {
    image::load_from_memory_with_format(bytes, format.image_format())
        .map_err(|e| ImagingError::Decode(format!("{format}: {e}")))
}

/// Encode a raster in `format`.
pub fn encode(
    img: &DynamicImage,
    format: ImageFormatTag,
    quality: Quality,
) -> Result<Vec<u8>, ImagingError> {
    let mut buf = Vec::new();
    let result = match format {
        ImageFormatTag::Jpeg => {
            // JPEG has no alpha channel
            let encoder = JpegEncoder::new_with_quality(&mut buf, quality.value() as u8);
            DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)
        }
        ImageFormatTag::Png => {
            let encoder =
                PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive);
            img.write_with_encoder(encoder)
        }
        ImageFormatTag::Gif => DynamicImage::ImageRgba8(img.to_rgba8())
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Gif),
    };
    result.map_err(|e| ImagingError::Encode(format!("{format}: {e}")))?;
    Ok(buf)
}
