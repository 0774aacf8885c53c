//! Star store: which visitors starred which image.
//!
//! The store is a single JSON file mapping image filename to the list of
//! visitor ids that starred it:
//!
//! ```json
//! {
//!   "dawn.jpg": ["3f2a…", "9c41…"],
//!   "dusk.png": []
//! }
//! ```
//!
//! A missing key and an empty list mean the same thing. Keys are never pruned
//! when their last visitor unstars, so empty lists accumulate harmlessly.
//!
//! ## Reading older files
//!
//! Besides the canonical shape above, [`StarStore::load`] accepts:
//! - an empty or whitespace-only file, and a bare `[]`, as the empty mapping;
//! - duplicate ids inside a list (collapsed);
//! - a visitor collection written as an index-keyed object
//!   (`{"0": "a", "2": "b"}`, what a sparse array serializes to), read as the
//!   set of its values.
//!
//! Anything else is [`StoreError::CorruptStore`]. A corrupt file is never
//! overwritten: the caller decides whether to back it up and start over.
//!
//! ## Concurrency
//!
//! [`StarStore::toggle`] holds an exclusive advisory lock on `<store>.lock`
//! from before the read until after the write, so concurrent toggles (threads
//! or processes) serialize instead of losing updates. Plain
//! [`load`](StarStore::load) takes no lock; writes are atomic renames, so it
//! sees either the old or the new file.

use crate::persist::write_atomic;
use fs2::FileExt;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cannot read star store {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Star store {path} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Cannot write star store {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("Cannot lock star store {path}: {source}")]
    Lock { path: PathBuf, source: io::Error },
}

/// Image filename → set of visitor ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawStarFile")]
pub struct StarMap {
    records: BTreeMap<String, BTreeSet<String>>,
}

impl StarMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `visitor` starred `image`. Unknown images are simply unstarred.
    pub fn is_starred(&self, image: &str, visitor: &str) -> bool {
        self.records
            .get(image)
            .is_some_and(|visitors| visitors.contains(visitor))
    }

    /// Number of visitors who starred `image`.
    pub fn star_count(&self, image: &str) -> usize {
        self.records.get(image).map_or(0, BTreeSet::len)
    }

    /// Images starred by `visitor`, in filename order.
    pub fn starred_by<'a>(&'a self, visitor: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.records
            .iter()
            .filter(move |(_, visitors)| visitors.contains(visitor))
            .map(|(image, _)| image.as_str())
    }

    /// Flip `visitor`'s membership for `image`; returns the new state.
    ///
    /// The record is created on first star and kept (possibly empty) on unstar.
    pub fn toggle(&mut self, image: &str, visitor: &str) -> bool {
        let visitors = self.records.entry(image.to_string()).or_default();
        if visitors.remove(visitor) {
            false
        } else {
            visitors.insert(visitor.to_string());
            true
        }
    }

    /// All records, including empty ones, in filename order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<I, V> FromIterator<(I, V)> for StarMap
where
    I: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, V)>>(iter: T) -> Self {
        Self {
            records: iter
                .into_iter()
                .map(|(image, visitors)| {
                    (image.into(), visitors.into_iter().map(Into::into).collect())
                })
                .collect(),
        }
    }
}

impl Serialize for StarMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

/// Pure lookup: missing key = empty set.
pub fn is_starred(map: &StarMap, image: &str, visitor: &str) -> bool {
    map.is_starred(image, visitor)
}

/// Every shape of star file we know how to read.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStarFile {
    Records(BTreeMap<String, RawVisitors>),
    List(Vec<IgnoredAny>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVisitors {
    List(Vec<String>),
    Indexed(BTreeMap<String, String>),
}

impl TryFrom<RawStarFile> for StarMap {
    type Error = String;

    fn try_from(raw: RawStarFile) -> Result<Self, Self::Error> {
        match raw {
            RawStarFile::Records(records) => Ok(Self {
                records: records
                    .into_iter()
                    .map(|(image, visitors)| {
                        let set = match visitors {
                            RawVisitors::List(list) => list.into_iter().collect(),
                            RawVisitors::Indexed(map) => map.into_values().collect(),
                        };
                        (image, set)
                    })
                    .collect(),
            }),
            RawStarFile::List(items) if items.is_empty() => Ok(Self::new()),
            RawStarFile::List(_) => Err("expected an object of image → visitors".into()),
        }
    }
}

/// File-backed [`StarMap`].
#[derive(Debug, Clone)]
pub struct StarStore {
    path: PathBuf,
}

impl StarStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted mapping. A missing or blank file is the empty mapping.
    pub fn load(&self) -> Result<StarMap, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StarMap::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(StarMap::new());
        }
        serde_json::from_str(&content).map_err(|e| StoreError::CorruptStore {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Replace the persisted mapping with `map`.
    pub fn save(&self, map: &StarMap) -> Result<(), StoreError> {
        let _lock = self.lock()?;
        self.write(map)
    }

    /// Flip `visitor`'s star on `image` and persist; returns the new state.
    pub fn toggle(&self, image: &str, visitor: &str) -> Result<bool, StoreError> {
        let _lock = self.lock()?;
        let mut map = self.load()?;
        let starred = map.toggle(image, visitor);
        self.write(&map)?;
        debug!(image, visitor, starred, "star toggled");
        Ok(starred)
    }

    fn write(&self, map: &StarMap) -> Result<(), StoreError> {
        let write_failed = |e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        };
        let mut json = serde_json::to_vec_pretty(map)
            .map_err(io::Error::from)
            .map_err(write_failed)?;
        json.push(b'\n');
        write_atomic(&self.path, &json).map_err(write_failed)
    }

    /// `stars.json` → `stars.json.lock`
    fn lock_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn lock(&self) -> Result<StoreLock, StoreError> {
        let path = self.lock_path();
        let lock_failed = |e| StoreError::Lock {
            path: path.clone(),
            source: e,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(lock_failed)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(lock_failed)?;
        file.lock_exclusive().map_err(lock_failed)?;
        Ok(StoreLock { file })
    }
}

/// Held for the duration of a read-modify-write; unlocks on drop.
struct StoreLock {
    file: File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
