//! Thumbnail cache.
//!
//! Maps an image filename to a thumbnail file at `<thumbs_dir>/<filename>`.
//! On a miss the source is read, handed to the [`ImageBackend`], and the result
//! written in place. On a hit nothing happens: the source is not even opened.
//!
//! # Validity
//!
//! What counts as a hit is decided by the [`InvalidationPolicy`]:
//!
//! - **`never`** (default): a thumbnail file that exists is valid, forever.
//!   Deleting it (by hand or through [`ThumbnailCache::invalidate`]) is the only
//!   way to get it regenerated.
//!
//! - **`content-hash`**: next to each thumbnail sits a hidden fingerprint file,
//!   `.<filename>.fingerprint`, holding `"{source_hash}:{params_hash}"`:
//!
//!   - **`source_hash`**: SHA-256 of the source file contents. Content-based
//!     rather than mtime-based so it survives `git checkout` and copies that
//!     reset modification times.
//!   - **`params_hash`**: SHA-256 of (width, height, quality). Changing the
//!     thumbnail box in the config regenerates everything.
//!
//!   A hit requires the thumbnail to exist *and* the fingerprint to match, so
//!   every lookup reads the source.
//!
//! # Concurrency
//!
//! The miss path takes no lock. Two simultaneous first requests for the same
//! image may both generate; both write identical bytes through a
//! write-then-rename, so the last writer wins and readers never see a partial
//! file.

use crate::imaging::{ImageBackend, ImageFormatTag, ImagingError, RustBackend, ThumbnailParams};
use crate::persist::{same_dir, write_atomic};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cannot read source image {path}: {source}")]
    SourceUnreadable { path: PathBuf, source: io::Error },
    #[error("Thumbnail generation failed for {path}: {source}")]
    GenerationFailed { path: PathBuf, source: ImagingError },
    #[error("Cannot write thumbnail {path}: {source}")]
    WriteFailed { path: PathBuf, source: io::Error },
    #[error("Thumbnail for {path} would overwrite the source image")]
    WouldOverwriteSource { path: PathBuf },
}

/// When a present thumbnail stops being valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidationPolicy {
    #[default]
    Never,
    ContentHash,
}

/// Whether a thumbnail file exists for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEntry {
    Absent,
    Present,
}

/// What [`ThumbnailCache::get_or_create`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit,
    Generated,
}

/// Write-once thumbnail store over a directory.
pub struct ThumbnailCache<B: ImageBackend = RustBackend> {
    thumbs_dir: PathBuf,
    params: ThumbnailParams,
    policy: InvalidationPolicy,
    backend: B,
}

impl ThumbnailCache<RustBackend> {
    pub fn new(thumbs_dir: PathBuf, params: ThumbnailParams, policy: InvalidationPolicy) -> Self {
        Self::with_backend(thumbs_dir, params, policy, RustBackend::new())
    }
}

impl<B: ImageBackend> ThumbnailCache<B> {
    pub fn with_backend(
        thumbs_dir: PathBuf,
        params: ThumbnailParams,
        policy: InvalidationPolicy,
        backend: B,
    ) -> Self {
        Self {
            thumbs_dir,
            params,
            policy,
            backend,
        }
    }

    pub fn thumbs_dir(&self) -> &Path {
        &self.thumbs_dir
    }

    pub fn params(&self) -> &ThumbnailParams {
        &self.params
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Derived thumbnail path for an image filename.
    pub fn thumbnail_path(&self, filename: &str) -> PathBuf {
        self.thumbs_dir.join(filename)
    }

    /// Whether a thumbnail file is present for `filename`.
    ///
    /// Under [`InvalidationPolicy::ContentHash`] a present entry may still be
    /// stale; [`get_or_create`](Self::get_or_create) decides that.
    pub fn lookup(&self, filename: &str) -> CacheEntry {
        entry_at(&self.thumbnail_path(filename))
    }

    /// Make sure `dest` holds a valid thumbnail of `source`.
    ///
    /// On a hit, returns immediately. On a miss, reads `source`, generates a
    /// thumbnail in the source's format and writes it to `dest`, creating the
    /// directory if needed.
    pub fn get_or_create(&self, source: &Path, dest: &Path) -> Result<CacheOutcome, CacheError> {
        match self.policy {
            InvalidationPolicy::Never => {
                if entry_at(dest) == CacheEntry::Present {
                    return Ok(CacheOutcome::Hit);
                }
                let bytes = read_source(source)?;
                self.render_to(source, &bytes, dest)?;
            }
            InvalidationPolicy::ContentHash => {
                let bytes = read_source(source)?;
                let fingerprint = format!(
                    "{}:{}",
                    hash_bytes(&bytes),
                    hash_thumbnail_params(&self.params)
                );
                let sidecar = fingerprint_path(dest);
                if entry_at(dest) == CacheEntry::Present
                    && fs::read_to_string(&sidecar).is_ok_and(|stored| stored == fingerprint)
                {
                    return Ok(CacheOutcome::Hit);
                }
                self.render_to(source, &bytes, dest)?;
                write_atomic(&sidecar, fingerprint.as_bytes()).map_err(|e| {
                    CacheError::WriteFailed {
                        path: sidecar.clone(),
                        source: e,
                    }
                })?;
            }
        }
        Ok(CacheOutcome::Generated)
    }

    /// [`get_or_create`](Self::get_or_create) at the derived path for `source`.
    pub fn thumbnail_for(&self, source: &Path) -> Result<(PathBuf, CacheOutcome), CacheError> {
        let filename = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CacheError::SourceUnreadable {
                path: source.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "no UTF-8 file name"),
            })?;
        if source
            .parent()
            .is_some_and(|dir| same_dir(dir, &self.thumbs_dir))
        {
            return Err(CacheError::WouldOverwriteSource {
                path: source.to_path_buf(),
            });
        }
        let dest = self.thumbnail_path(filename);
        let outcome = self.get_or_create(source, &dest)?;
        Ok((dest, outcome))
    }

    /// Drop the cached thumbnail for `filename` so the next request regenerates it.
    ///
    /// Returns whether a thumbnail was present.
    pub fn invalidate(&self, filename: &str) -> Result<bool, CacheError> {
        let dest = self.thumbnail_path(filename);
        let removed = remove_if_present(&dest)?;
        remove_if_present(&fingerprint_path(&dest))?;
        Ok(removed)
    }

    fn render_to(&self, source: &Path, bytes: &[u8], dest: &Path) -> Result<(), CacheError> {
        let generation_failed = |e| CacheError::GenerationFailed {
            path: source.to_path_buf(),
            source: e,
        };
        let format = ImageFormatTag::from_path(source).map_err(generation_failed)?;
        let thumbnail = self
            .backend
            .thumbnail(bytes, format, &self.params)
            .map_err(generation_failed)?;
        write_atomic(dest, &thumbnail).map_err(|e| CacheError::WriteFailed {
            path: dest.to_path_buf(),
            source: e,
        })
    }
}

fn entry_at(path: &Path) -> CacheEntry {
    if path.is_file() {
        CacheEntry::Present
    } else {
        CacheEntry::Absent
    }
}

fn read_source(path: &Path) -> Result<Vec<u8>, CacheError> {
    fs::read(path).map_err(|e| CacheError::SourceUnreadable {
        path: path.to_path_buf(),
        source: e,
    })
}

fn remove_if_present(path: &Path) -> Result<bool, CacheError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(CacheError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Hidden sidecar next to a thumbnail: `thumbs/.dawn.jpg.fingerprint`.
fn fingerprint_path(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    dest.with_file_name(format!(".{name}.fingerprint"))
}

/// SHA-256 of a byte slice, returned as a hex string.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// SHA-256 of the thumbnail parameters.
///
/// Inputs: box width, box height and quality. If any of these change, every
/// thumbnail is regenerated under the content-hash policy.
pub fn hash_thumbnail_params(params: &ThumbnailParams) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"thumbnail\0");
    hasher.update(params.width.to_le_bytes());
    hasher.update(params.height.to_le_bytes());
    hasher.update(params.quality.value().to_le_bytes());
    format!("{:x}", hasher.finalize())
}

/// Summary of cache performance for a warm-up run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u32,
    pub generated: u32,
    pub failed: u32,
}

impl CacheStats {
    pub fn hit(&mut self) {
        self.hits += 1;
    }

    pub fn generate(&mut self) {
        self.generated += 1;
    }

    pub fn fail(&mut self) {
        self.failed += 1;
    }

    pub fn record(&mut self, outcome: &Result<CacheOutcome, CacheError>) {
        match outcome {
            Ok(CacheOutcome::Hit) => self.hit(),
            Ok(CacheOutcome::Generated) => self.generate(),
            Err(_) => self.fail(),
        }
    }

    pub fn total(&self) -> u32 {
        self.hits + self.generated + self.failed
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits == 0 && self.failed == 0 {
            return write!(f, "{} generated", self.generated);
        }
        write!(f, "{} cached, {} generated", self.hits, self.generated)?;
        if self.failed > 0 {
            write!(f, ", {} failed", self.failed)?;
        }
        write!(f, " ({} total)", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Quality;
    use crate::imaging::backend::tests::MockBackend;
    use crate::test_helpers::write_image;
    use tempfile::TempDir;

    fn mock_cache(tmp: &TempDir, policy: InvalidationPolicy) -> ThumbnailCache<MockBackend> {
        ThumbnailCache::with_backend(
            tmp.path().join("thumbs"),
            ThumbnailParams::default(),
            policy,
            MockBackend::new(),
        )
    }

    fn source(tmp: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = tmp.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    #[test]
    fn lookup_absent_then_present() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::Never);
        let src = source(&tmp, "dawn.jpg", b"jpeg bytes");

        assert_eq!(cache.lookup("dawn.jpg"), CacheEntry::Absent);
        cache.thumbnail_for(&src).unwrap();
        assert_eq!(cache.lookup("dawn.jpg"), CacheEntry::Present);
    }

    #[test]
    fn thumbnail_path_is_thumbs_dir_plus_filename() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::Never);
        assert_eq!(
            cache.thumbnail_path("dawn.jpg"),
            tmp.path().join("thumbs/dawn.jpg")
        );
    }

    // =========================================================================
    // get_or_create: default policy
    // =========================================================================

    #[test]
    fn miss_generates_and_writes() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::Never);
        let src = source(&tmp, "dawn.png", b"png bytes");
        let dest = cache.thumbnail_path("dawn.png");

        let outcome = cache.get_or_create(&src, &dest).unwrap();

        assert_eq!(outcome, CacheOutcome::Generated);
        assert_eq!(fs::read(&dest).unwrap(), b"thumb:PNG:250x250");
        let ops = cache.backend().get_operations();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].format, ImageFormatTag::Png);
        assert_eq!(ops[0].source_len, 9);
    }

    #[test]
    fn second_call_does_not_rewrite() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::Never);
        let src = source(&tmp, "dawn.jpg", b"jpeg bytes");
        let dest = cache.thumbnail_path("dawn.jpg");

        cache.get_or_create(&src, &dest).unwrap();
        // Sentinel: a rewrite would replace this
        fs::write(&dest, b"sentinel").unwrap();

        let outcome = cache.get_or_create(&src, &dest).unwrap();

        assert_eq!(outcome, CacheOutcome::Hit);
        assert_eq!(fs::read(&dest).unwrap(), b"sentinel");
        assert_eq!(cache.backend().call_count(), 1);
    }

    #[test]
    fn hit_does_not_touch_source() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::Never);
        let src = source(&tmp, "dawn.jpg", b"jpeg bytes");
        let dest = cache.thumbnail_path("dawn.jpg");

        cache.get_or_create(&src, &dest).unwrap();
        fs::remove_file(&src).unwrap();

        assert_eq!(cache.get_or_create(&src, &dest).unwrap(), CacheOutcome::Hit);
    }

    #[test]
    fn changed_source_is_not_regenerated_by_default() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::Never);
        let src = source(&tmp, "dawn.jpg", b"v1");
        let dest = cache.thumbnail_path("dawn.jpg");

        cache.get_or_create(&src, &dest).unwrap();
        fs::write(&src, b"v2 with more bytes").unwrap();

        assert_eq!(cache.get_or_create(&src, &dest).unwrap(), CacheOutcome::Hit);
        assert_eq!(cache.backend().call_count(), 1);
    }

    #[test]
    fn missing_source_is_unreadable() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::Never);
        let src = tmp.path().join("gone.jpg");

        let err = cache
            .get_or_create(&src, &cache.thumbnail_path("gone.jpg"))
            .unwrap_err();

        assert!(matches!(err, CacheError::SourceUnreadable { path, .. } if path == src));
        assert_eq!(cache.backend().call_count(), 0);
    }

    #[test]
    fn backend_failure_is_generation_failed() {
        let tmp = TempDir::new().unwrap();
        let cache = ThumbnailCache::with_backend(
            tmp.path().join("thumbs"),
            ThumbnailParams::default(),
            InvalidationPolicy::Never,
            MockBackend::failing(),
        );
        let src = source(&tmp, "broken.jpg", b"garbage");
        let dest = cache.thumbnail_path("broken.jpg");

        let err = cache.get_or_create(&src, &dest).unwrap_err();

        assert!(matches!(
            err,
            CacheError::GenerationFailed {
                source: ImagingError::Decode(_),
                ..
            }
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn unsupported_extension_never_reaches_backend() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::Never);
        let src = source(&tmp, "scan.bmp", b"BM");

        let err = cache
            .get_or_create(&src, &cache.thumbnail_path("scan.bmp"))
            .unwrap_err();

        assert!(matches!(
            err,
            CacheError::GenerationFailed {
                source: ImagingError::UnsupportedFormat(_),
                ..
            }
        ));
        assert_eq!(cache.backend().call_count(), 0);
    }

    #[test]
    fn unwritable_destination_is_write_failed() {
        let tmp = TempDir::new().unwrap();
        // thumbs "directory" is a regular file
        fs::write(tmp.path().join("thumbs"), b"").unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::Never);
        let src = source(&tmp, "dawn.jpg", b"jpeg bytes");

        let err = cache.thumbnail_for(&src).unwrap_err();

        assert!(matches!(err, CacheError::WriteFailed { .. }));
    }

    #[test]
    fn thumbs_dir_created_on_demand() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::Never);
        assert!(!cache.thumbs_dir().exists());
        let src = source(&tmp, "dawn.jpg", b"jpeg bytes");
        cache.thumbnail_for(&src).unwrap();
        assert!(cache.thumbs_dir().is_dir());
    }

    #[test]
    fn thumbs_dir_at_source_dir_never_touches_source() {
        let tmp = TempDir::new().unwrap();
        let src = source(&tmp, "dawn.jpg", b"jpeg bytes");
        for policy in [InvalidationPolicy::Never, InvalidationPolicy::ContentHash] {
            let cache = ThumbnailCache::with_backend(
                tmp.path().join("."),
                ThumbnailParams::default(),
                policy,
                MockBackend::new(),
            );

            let err = cache.thumbnail_for(&src).unwrap_err();

            assert!(matches!(err, CacheError::WouldOverwriteSource { .. }));
            assert!(cache.backend().get_operations().is_empty());
        }
        assert_eq!(fs::read(&src).unwrap(), b"jpeg bytes");
    }

    // =========================================================================
    // get_or_create: content-hash policy
    // =========================================================================

    #[test]
    fn content_hash_hit_when_unchanged() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::ContentHash);
        let src = source(&tmp, "dawn.jpg", b"v1");

        assert_eq!(cache.thumbnail_for(&src).unwrap().1, CacheOutcome::Generated);
        assert_eq!(cache.thumbnail_for(&src).unwrap().1, CacheOutcome::Hit);
        assert_eq!(cache.backend().call_count(), 1);
    }

    #[test]
    fn content_hash_regenerates_on_source_change() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::ContentHash);
        let src = source(&tmp, "dawn.jpg", b"v1");

        cache.thumbnail_for(&src).unwrap();
        fs::write(&src, b"v2").unwrap();

        assert_eq!(cache.thumbnail_for(&src).unwrap().1, CacheOutcome::Generated);
        assert_eq!(cache.backend().call_count(), 2);
    }

    #[test]
    fn content_hash_regenerates_on_params_change() {
        let tmp = TempDir::new().unwrap();
        let src = source(&tmp, "dawn.jpg", b"v1");
        let small = mock_cache(&tmp, InvalidationPolicy::ContentHash);
        small.thumbnail_for(&src).unwrap();

        let large = ThumbnailCache::with_backend(
            tmp.path().join("thumbs"),
            ThumbnailParams {
                width: 400,
                height: 400,
                quality: Quality::default(),
            },
            InvalidationPolicy::ContentHash,
            MockBackend::new(),
        );
        let (dest, outcome) = large.thumbnail_for(&src).unwrap();

        assert_eq!(outcome, CacheOutcome::Generated);
        assert_eq!(fs::read(dest).unwrap(), b"thumb:JPEG:400x400");
    }

    #[test]
    fn content_hash_regenerates_thumbnail_without_fingerprint() {
        // A thumbnail written under the default policy has no fingerprint yet
        let tmp = TempDir::new().unwrap();
        let src = source(&tmp, "dawn.jpg", b"v1");
        mock_cache(&tmp, InvalidationPolicy::Never)
            .thumbnail_for(&src)
            .unwrap();

        let cache = mock_cache(&tmp, InvalidationPolicy::ContentHash);
        assert_eq!(cache.thumbnail_for(&src).unwrap().1, CacheOutcome::Generated);
        assert_eq!(cache.thumbnail_for(&src).unwrap().1, CacheOutcome::Hit);
    }

    #[test]
    fn fingerprint_is_hidden_sidecar() {
        assert_eq!(
            fingerprint_path(Path::new("/t/dawn.jpg")),
            PathBuf::from("/t/.dawn.jpg.fingerprint")
        );
    }

    // =========================================================================
    // Invalidation
    // =========================================================================

    #[test]
    fn invalidate_forces_regeneration() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::Never);
        let src = source(&tmp, "dawn.jpg", b"v1");
        cache.thumbnail_for(&src).unwrap();

        assert!(cache.invalidate("dawn.jpg").unwrap());
        assert_eq!(cache.lookup("dawn.jpg"), CacheEntry::Absent);
        assert_eq!(cache.thumbnail_for(&src).unwrap().1, CacheOutcome::Generated);
    }

    #[test]
    fn invalidate_absent_is_false() {
        let tmp = TempDir::new().unwrap();
        let cache = mock_cache(&tmp, InvalidationPolicy::ContentHash);
        assert!(!cache.invalidate("nothing.jpg").unwrap());
    }

    // =========================================================================
    // Real backend
    // =========================================================================

    #[test]
    fn real_backend_writes_box_sized_thumbnail() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("wide.jpg");
        write_image(&src, 800, 600);
        let cache = ThumbnailCache::new(
            tmp.path().join("thumbs"),
            ThumbnailParams::default(),
            InvalidationPolicy::Never,
        );

        let (dest, outcome) = cache.thumbnail_for(&src).unwrap();

        assert_eq!(outcome, CacheOutcome::Generated);
        assert_eq!(image::image_dimensions(&dest).unwrap(), (250, 250));
    }

    // =========================================================================
    // Hash functions
    // =========================================================================

    #[test]
    fn hash_bytes_is_sha256_hex() {
        let h = hash_bytes(b"hello world");
        assert_eq!(h.len(), 64);
        assert_eq!(h, hash_bytes(b"hello world"));
        assert_ne!(h, hash_bytes(b"hello world!"));
    }

    #[test]
    fn hash_thumbnail_params_varies_with_each_field() {
        let base = ThumbnailParams::default();
        let wider = ThumbnailParams { width: 300, ..base };
        let taller = ThumbnailParams {
            height: 300,
            ..base
        };
        let sharper = ThumbnailParams {
            quality: Quality::new(50),
            ..base
        };
        let h = hash_thumbnail_params(&base);
        assert_eq!(h, hash_thumbnail_params(&ThumbnailParams::default()));
        assert_ne!(h, hash_thumbnail_params(&wider));
        assert_ne!(h, hash_thumbnail_params(&taller));
        assert_ne!(h, hash_thumbnail_params(&sharper));
    }

    // =========================================================================
    // CacheStats
    // =========================================================================

    #[test]
    fn cache_stats_display_with_hits() {
        let stats = CacheStats {
            hits: 5,
            generated: 2,
            failed: 0,
        };
        assert_eq!(stats.to_string(), "5 cached, 2 generated (7 total)");
    }

    #[test]
    fn cache_stats_display_with_failures() {
        let stats = CacheStats {
            hits: 3,
            generated: 2,
            failed: 1,
        };
        assert_eq!(stats.to_string(), "3 cached, 2 generated, 1 failed (6 total)");
    }

    #[test]
    fn cache_stats_display_cold() {
        let stats = CacheStats {
            hits: 0,
            generated: 3,
            failed: 0,
        };
        assert_eq!(stats.to_string(), "3 generated");
    }

    #[test]
    fn cache_stats_record() {
        let mut stats = CacheStats::default();
        stats.record(&Ok(CacheOutcome::Hit));
        stats.record(&Ok(CacheOutcome::Generated));
        stats.record(&Err(CacheError::WriteFailed {
            path: PathBuf::from("x"),
            source: io::Error::other("disk full"),
        }));
        assert_eq!(
            stats,
            CacheStats {
                hits: 1,
                generated: 1,
                failed: 1
            }
        );
    }
}
