//! # Starboard
//!
//! A directory of images served as a gallery. Two things make it more than a
//! file listing: thumbnails are generated lazily and cached on disk, and each
//! visitor can star images, with stars persisted in a flat JSON file.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────┐
//!   CLI / HTTP →  │   Gallery    │  (validates names against a scan)
//!                 └──┬────┬───┬──┘
//!                    │    │   │
//!          ┌─────────┘    │   └──────────┐
//!          ▼              ▼              ▼
//!       scan         ThumbnailCache   StarStore
//!    (allow-list)        │            (stars.json + lock)
//!                        ▼
//!                   ImageBackend
//!            decode → crop-to-fill → encode
//! ```
//!
//! The core is two subsystems. The thumbnail cache turns "get or create the
//! thumbnail for X" into at most one generation per image; the star store turns
//! "toggle (image, visitor)" into a locked read-modify-write of one JSON file.
//! Everything else is wiring.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Format tags, codec, crop geometry, thumbnail generation |
//! | [`cache`] | Write-once thumbnail cache with invalidation policies |
//! | [`stars`] | File-backed image → visitor-set store with toggle semantics |
//! | [`scan`] | Non-recursive allow-listed directory listing |
//! | [`gallery`] | Facade used by the CLI and the HTTP API |
//! | [`web`] | axum router: listing, star toggle, image and thumbnail bytes |
//! | [`config`] | `starboard.toml` loading, merging over defaults, validation |
//! | [`output`] | CLI output formatting |
//! | [`persist`] | Atomic file replacement shared by cache and store |
//!
//! # Design Decisions
//!
//! ## Top-Anchored Crop
//!
//! Thumbnails fill their box exactly. The source is scaled by the larger of the
//! two box/source ratios and the overflow is cut: horizontally it is split
//! between both sides, vertically it all comes off the bottom. Portraits keep
//! their top, which is where faces and skylines usually are.
//!
//! ## Existence Is Validity
//!
//! By default a thumbnail file that exists is a cache hit, with no mtime or
//! hash check. Source images are treated as immutable. Galleries that do edit
//! sources in place can opt into `invalidation = "content-hash"`.
//!
//! ## A Locked JSON File Instead Of A Database
//!
//! Stars are a few kilobytes of `{"image": ["visitor", ...]}`. The file stays
//! readable and hand-editable; an advisory lock around each toggle is enough to
//! keep concurrent requests from losing updates.

pub mod cache;
pub mod config;
pub mod gallery;
pub mod imaging;
pub mod output;
pub mod persist;
pub mod scan;
pub mod stars;
pub mod web;

#[cfg(test)]
pub(crate) mod test_helpers;
