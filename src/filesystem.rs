//! # Host Filesystem Helpers
//!
//! The documentation builder moves generator output between directories, and
//! the orchestrator drops a marker file into the destination checkout. Both
//! go through the helpers here.
//!
//! Copies are *merges*: files present in the destination but not in the
//! source are left alone, and files present in both are overwritten. The
//! destination checkout gets its full-replacement semantics from the
//! repository manager wiping tracked files first, not from the copy.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Recursively copies the contents of `src` into `dst`, creating `dst` and
/// any intermediate directories. Returns the number of files copied.
pub fn copy_dir_merge(src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Err(Error::Filesystem {
            message: format!("Source directory '{}' does not exist", src.display()),
        });
    }

    fs::create_dir_all(dst).map_err(|e| Error::Filesystem {
        message: format!("Failed to create directory '{}': {}", dst.display(), e),
    })?;

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(|e| Error::Filesystem {
            message: format!("Failed to walk '{}': {}", src.display(), e),
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| Error::Filesystem {
                message: format!(
                    "Path '{}' is outside '{}': {}",
                    entry.path().display(),
                    src.display(),
                    e
                ),
            })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::Filesystem {
                message: format!("Failed to create directory '{}': {}", target.display(), e),
            })?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
                    message: format!("Failed to create directory '{}': {}", parent.display(), e),
                })?;
            }
            fs::copy(entry.path(), &target).map_err(|e| Error::Filesystem {
                message: format!(
                    "Failed to copy '{}' to '{}': {}",
                    entry.path().display(),
                    target.display(),
                    e
                ),
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Creates (or truncates) an empty file named `name` directly inside `dir`.
pub fn write_marker(dir: &Path, name: &str) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, b"").map_err(|e| Error::Filesystem {
        message: format!("Failed to write marker '{}': {}", path.display(), e),
    })
}

/// Removes every entry inside `dir`, keeping `dir` itself.
pub fn clear_dir(dir: &Path) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
