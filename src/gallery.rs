//! Gallery facade.
//!
//! Wires the scanner, the thumbnail cache and the star store together behind
//! the operations a front end needs. Both the CLI and the HTTP API go through
//! here.
//!
//! Every operation that takes an image filename checks it against a fresh
//! scan first. Only allow-listed files at the top of the data directory can
//! be thumbnailed, served or starred; a name like `../secret.jpg` or
//! `stars.json` is [`GalleryError::UnknownImage`].
//!
//! The gallery holds no mutable state: each call rescans, and star state is
//! read from disk every time. Concurrent callers only share the filesystem.

use crate::cache::{CacheError, CacheOutcome, CacheStats, ThumbnailCache};
use crate::config::GalleryConfig;
use crate::imaging::{ImageBackend, ImageFormatTag, RustBackend};
use crate::scan::{self, ImageFile, ScanError};
use crate::stars::{StarMap, StarStore, StoreError};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Unknown image: {0:?}")]
    UnknownImage(String),
}

/// One row of a gallery listing, as seen by one visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub filename: String,
    /// Thumbnail path, or `None` when generation failed (render a placeholder).
    pub thumbnail: Option<PathBuf>,
    pub starred: bool,
    /// Total number of visitors who starred the image.
    pub stars: usize,
}

/// A thumbnail ready to be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailFile {
    pub path: PathBuf,
    pub format: ImageFormatTag,
    pub outcome: CacheOutcome,
}

/// Progress events emitted by [`Gallery::warm_thumbnails`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarmEvent {
    Started { image_count: usize },
    Thumbnail { filename: String, status: WarmStatus },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarmStatus {
    Cached,
    Generated,
    Failed(String),
}

pub struct Gallery<B: ImageBackend = RustBackend> {
    data_dir: PathBuf,
    extensions: Vec<String>,
    cache: ThumbnailCache<B>,
    store: StarStore,
}

impl Gallery<RustBackend> {
    pub fn open(config: &GalleryConfig) -> Self {
        Self::with_backend(config, RustBackend::new())
    }
}

impl<B: ImageBackend> Gallery<B> {
    /// Build a gallery with a specific backend (allows testing with mock).
    pub fn with_backend(config: &GalleryConfig, backend: B) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            extensions: config.scan.extensions.clone(),
            cache: ThumbnailCache::with_backend(
                config.thumbs_path(),
                config.thumbnail_params(),
                config.thumbnails.invalidation,
                backend,
            ),
            store: StarStore::new(config.store_path()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn cache(&self) -> &ThumbnailCache<B> {
        &self.cache
    }

    pub fn store(&self) -> &StarStore {
        &self.store
    }

    /// All images in the data directory, sorted by filename.
    pub fn images(&self) -> Result<Vec<ImageFile>, GalleryError> {
        Ok(scan::scan_images(&self.data_dir, &self.extensions)?)
    }

    /// Look up a single image by filename.
    pub fn image(&self, filename: &str) -> Result<ImageFile, GalleryError> {
        self.images()?
            .into_iter()
            .find(|image| image.filename == filename)
            .ok_or_else(|| GalleryError::UnknownImage(filename.to_string()))
    }

    /// Get or create the thumbnail for `filename`.
    pub fn thumbnail(&self, filename: &str) -> Result<ThumbnailFile, GalleryError> {
        let image = self.image(filename)?;
        let (path, outcome) = self.cache.thumbnail_for(&image.path)?;
        Ok(ThumbnailFile {
            path,
            format: image.format,
            outcome,
        })
    }

    /// Toggle `visitor`'s star on `filename`; returns the new state.
    pub fn toggle_star(&self, filename: &str, visitor: &str) -> Result<bool, GalleryError> {
        self.image(filename)?;
        Ok(self.store.toggle(filename, visitor)?)
    }

    pub fn stars(&self) -> Result<StarMap, GalleryError> {
        Ok(self.store.load()?)
    }

    /// Every image with its thumbnail and `visitor`'s star state.
    ///
    /// A thumbnail that cannot be produced is logged and reported as `None`;
    /// the rest of the listing is unaffected. A corrupt star store fails the
    /// whole listing.
    pub fn listing(&self, visitor: &str) -> Result<Vec<ListingEntry>, GalleryError> {
        let stars = self.store.load()?;
        let entries = self
            .images()?
            .into_iter()
            .map(|image| {
                let thumbnail = match self.cache.thumbnail_for(&image.path) {
                    Ok((path, _)) => Some(path),
                    Err(e) => {
                        warn!(image = %image.filename, error = %e, "thumbnail unavailable");
                        None
                    }
                };
                ListingEntry {
                    starred: stars.is_starred(&image.filename, visitor),
                    stars: stars.star_count(&image.filename),
                    filename: image.filename,
                    thumbnail,
                }
            })
            .collect();
        Ok(entries)
    }

    /// Generate every missing thumbnail in parallel.
    ///
    /// Failures are counted, not fatal. If `events` is given, progress is sent
    /// through it as each image finishes.
    pub fn warm_thumbnails(
        &self,
        events: Option<Sender<WarmEvent>>,
    ) -> Result<CacheStats, GalleryError> {
        let images = self.images()?;
        if let Some(tx) = &events {
            tx.send(WarmEvent::Started {
                image_count: images.len(),
            })
            .ok();
        }

        let outcomes: Vec<Result<CacheOutcome, CacheError>> = images
            .par_iter()
            .map(|image| {
                let outcome = self.cache.thumbnail_for(&image.path).map(|(_, o)| o);
                if let Err(e) = &outcome {
                    warn!(image = %image.filename, error = %e, "thumbnail failed");
                }
                if let Some(tx) = &events {
                    let status = match &outcome {
                        Ok(CacheOutcome::Hit) => WarmStatus::Cached,
                        Ok(CacheOutcome::Generated) => WarmStatus::Generated,
                        Err(e) => WarmStatus::Failed(e.to_string()),
                    };
                    tx.send(WarmEvent::Thumbnail {
                        filename: image.filename.clone(),
                        status,
                    })
                    .ok();
                }
                outcome
            })
            .collect();

        let mut stats = CacheStats::default();
        for outcome in &outcomes {
            stats.record(outcome);
        }
        info!(%stats, "thumbnails warmed");
        Ok(stats)
    }

    /// Drop the cached thumbnail for `filename`. Returns whether one existed.
    pub fn invalidate(&self, filename: &str) -> Result<bool, GalleryError> {
        self.image(filename)?;
        Ok(self.cache.invalidate(filename)?)
    }
}
