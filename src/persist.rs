//! Write-then-rename file replacement.
//!
//! Both the thumbnail cache and the star store replace whole files. Writing
//! into a temporary file in the same directory and renaming it over the target
//! means readers see either the old content or the new one, never a prefix.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

/// Atomically replace `path` with `bytes`, creating parent directories.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Whether two directory paths name the same location.
///
/// Existing directories are compared after canonicalisation, so symlinks are
/// resolved. Otherwise both paths are made absolute and compared with `.` and
/// `..` folded away.
pub fn same_dir(a: &Path, b: &Path) -> bool {
    if let (Ok(a), Ok(b)) = (fs::canonicalize(a), fs::canonicalize(b)) {
        return a == b;
    }
    match (lexical_absolute(a), lexical_absolute(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn lexical_absolute(path: &Path) -> Option<PathBuf> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    let absolute = std::path::absolute(path).ok()?;
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    Some(out)
}
