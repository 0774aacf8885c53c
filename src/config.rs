//! Gallery configuration module.
//!
//! Handles loading, validating, and merging `starboard.toml`. Stock defaults
//! are the base layer; the user file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! data_dir = "."            # Directory holding the images
//! thumbs_dir = "thumbs"     # Relative to data_dir unless absolute
//! store_file = "stars.json" # Relative to data_dir unless absolute
//!
//! [thumbnails]
//! width = 250
//! height = 250
//! quality = 90              # JPEG quality (1-100); PNG/GIF are lossless
//! invalidation = "never"    # or "content-hash"
//!
//! [scan]
//! extensions = ["jpg", "jpeg", "png", "gif"]
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::cache::InvalidationPolicy;
use crate::imaging::{Quality, ThumbnailParams, supported_extensions};
use crate::persist::same_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `starboard.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Directory scanned for images (not recursive).
    pub data_dir: PathBuf,
    /// Where thumbnails are cached, one file per image filename.
    pub thumbs_dir: PathBuf,
    /// JSON file holding the star records.
    pub store_file: PathBuf,
    pub thumbnails: ThumbnailsConfig,
    pub scan: ScanConfig,
    pub server: ServerConfig,
    pub processing: ProcessingConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            thumbs_dir: PathBuf::from("thumbs"),
            store_file: PathBuf::from("stars.json"),
            thumbnails: ThumbnailsConfig::default(),
            scan: ScanConfig::default(),
            server: ServerConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thumbnails.width == 0 || self.thumbnails.height == 0 {
            return Err(ConfigError::Validation(
                "thumbnails.width and thumbnails.height must be non-zero".into(),
            ));
        }
        if !(1..=100).contains(&self.thumbnails.quality) {
            return Err(ConfigError::Validation(
                "thumbnails.quality must be 1-100".into(),
            ));
        }
        if self.scan.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "scan.extensions must not be empty".into(),
            ));
        }
        for ext in &self.scan.extensions {
            if !supported_extensions().any(|known| known.eq_ignore_ascii_case(ext)) {
                return Err(ConfigError::Validation(format!(
                    "scan.extensions: {ext:?} is not a supported format (expected one of: {})",
                    supported_extensions().collect::<Vec<_>>().join(", ")
                )));
            }
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port must be non-zero".into()));
        }
        // Thumbnails share their source's filename
        if same_dir(&self.thumbs_path(), &self.data_dir) {
            return Err(ConfigError::Validation(format!(
                "thumbs_dir {:?} resolves to data_dir; thumbnails would replace the images",
                self.thumbs_dir
            )));
        }
        Ok(())
    }

    /// Thumbnail directory, resolved against `data_dir`.
    pub fn thumbs_path(&self) -> PathBuf {
        self.data_dir.join(&self.thumbs_dir)
    }

    /// Star store file, resolved against `data_dir`.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.store_file)
    }

    pub fn thumbnail_params(&self) -> ThumbnailParams {
        ThumbnailParams {
            width: self.thumbnails.width,
            height: self.thumbnails.height,
            quality: Quality::new(self.thumbnails.quality),
        }
    }
}

/// Thumbnail generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailsConfig {
    pub width: u32,
    pub height: u32,
    /// JPEG encoding quality. Ignored for PNG and GIF.
    pub quality: u32,
    pub invalidation: InvalidationPolicy,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        let params = ThumbnailParams::default();
        Self {
            width: params.width,
            height: params.height,
            quality: params.quality.value(),
            invalidation: InvalidationPolicy::default(),
        }
    }
}

/// Directory scan settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Allowed source extensions, matched case-insensitively.
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: supported_extensions().map(String::from).collect(),
        }
    }
}

/// HTTP listener settings for `starboard serve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel thumbnail workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML file.
///
/// A missing file is not an error: the stock defaults are used.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    let overlay = if path.exists() {
        let content = fs::read_to_string(path)?;
        Some(toml::from_str::<toml::Value>(&content)?)
    } else {
        None
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock `starboard.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Starboard Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory holding the source images. Only its top level is scanned.
data_dir = "."

# Thumbnail cache directory (relative paths are resolved against data_dir).
thumbs_dir = "thumbs"

# Star store: JSON mapping image filename -> list of visitor ids
# (relative paths are resolved against data_dir).
store_file = "stars.json"

# ---------------------------------------------------------------------------
# Thumbnails
# ---------------------------------------------------------------------------
[thumbnails]
# Every thumbnail fills this box exactly (crop-to-fill).
width = 250
height = 250

# JPEG encoding quality (1 = worst, 100 = best). PNG and GIF are lossless.
quality = 90

# When is a cached thumbnail stale?
#   "never"        - once written, a thumbnail is kept until deleted by hand
#   "content-hash" - regenerate when the source bytes or the settings above change
invalidation = "never"

# ---------------------------------------------------------------------------
# Scanning
# ---------------------------------------------------------------------------
[scan]
# Source file extensions to show (case-insensitive). Subset of the default.
extensions = ["jpg", "jpeg", "png", "gif"]

# ---------------------------------------------------------------------------
# HTTP server (starboard serve)
# ---------------------------------------------------------------------------
[server]
host = "127.0.0.1"
port = 8080

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel workers for `starboard thumbs`.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
