//! Image processing in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode / encode** | `image` codecs for JPEG, PNG, GIF |
//! | **Crop geometry** | [`crop_region`] (pure math) |
//! | **Thumbnail** | `crop_imm` + `resize_exact` (Lanczos3) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop geometry (unit testable)
//! - **Parameters**: Data structures describing a thumbnail
//! - **Codec**: Format tags, decode and encode
//! - **Generator**: Crop-to-fill on a decoded raster
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
pub mod codec;
pub mod generator;
mod params;
pub mod rust_backend;

pub use backend::{ImageBackend, ImagingError};
pub use calculations::{CropRegion, cover_ratio, crop_region};
pub use codec::{ImageFormatTag, supported_extensions};
pub use params::{Quality, ThumbnailParams};
pub use rust_backend::RustBackend;
