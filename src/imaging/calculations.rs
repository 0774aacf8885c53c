//! Pure calculation functions for thumbnail geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::ImagingError;

/// Region of the source image that gets resampled into the thumbnail box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Scale factor that makes the source cover the target box.
///
/// The larger of the two axis ratios wins, so one axis fits exactly and the
/// other overflows (and is cropped). Values above 1.0 mean upscaling.
pub fn cover_ratio(source: (u32, u32), target: (u32, u32)) -> f64 {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;
    f64::max(
        tgt_w as f64 / src_w as f64,
        tgt_h as f64 / src_h as f64,
    )
}

/// Snap values within float noise of an integer (599.9999999 → 600)
/// so `ceil` doesn't add a phantom pixel.
fn snap(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-6 {
        rounded
    } else {
        value
    }
}

/// Calculate the crop-to-fill source region for a target box.
///
/// The region has the target's aspect ratio, is centered horizontally and
/// anchored to the top edge (`y` is always 0). Portrait sources therefore keep
/// their top part rather than their middle.
///
/// # Examples
/// ```
/// # use starboard::imaging::{crop_region, CropRegion};
/// // 800x600 into 250x250: height binds, a 600x600 square from x=100
/// assert_eq!(
///     crop_region((800, 600), (250, 250)).unwrap(),
///     CropRegion { x: 100, y: 0, width: 600, height: 600 }
/// );
/// ```
pub fn crop_region(source: (u32, u32), target: (u32, u32)) -> Result<CropRegion, ImagingError> {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;
    if tgt_w == 0 || tgt_h == 0 {
        return Err(ImagingError::InvalidDimensions {
            width: tgt_w,
            height: tgt_h,
        });
    }
    if src_w == 0 || src_h == 0 {
        return Err(ImagingError::InvalidDimensions {
            width: src_w,
            height: src_h,
        });
    }

    let ratio = cover_ratio(source, target);
    let scaled_w = snap(tgt_w as f64 / ratio);
    let scaled_h = snap(tgt_h as f64 / ratio);

    let x = ((src_w as f64 - scaled_w) / 2.0).max(0.0) as u32;
    let width = (scaled_w.ceil() as u32).clamp(1, src_w - x);
    let height = (scaled_h.ceil() as u32).clamp(1, src_h);

    Ok(CropRegion {
        x,
        y: 0,
        width,
        height,
    })
}
