//! Crop-to-fill thumbnail generation.
//!
//! The source is scaled so it covers the target box, then the overflow is
//! cropped: centered horizontally, anchored to the top vertically. See
//! [`crop_region`] for the exact geometry. Resampling uses Lanczos3.

use super::backend::ImagingError;
use super::calculations::crop_region;
use super::codec::{self, ImageFormatTag};
use image::DynamicImage;
use image::imageops::FilterType;

/// Decode `source` and produce a raster of exactly `width` x `height`.
pub fn generate(
    source: &[u8],
    format: ImageFormatTag,
    width: u32,
    height: u32,
) -> Result<DynamicImage, ImagingError> {
    if width == 0 || height == 0 {
        return Err(ImagingError::InvalidDimensions { width, height });
    }
    let img = codec::decode(source, format)?;
    fill_box(&img, width, height)
}

/// Crop-to-fill an already decoded raster.
pub fn fill_box(img: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage, ImagingError> {
    let region = crop_region((img.width(), img.height()), (width, height))?;
    let cropped = img.crop_imm(region.x, region.y, region.width, region.height);
    Ok(cropped.resize_exact(width, height, FilterType::Lanczos3))
}
