//! Byte sources and sinks for case files.
//!
//! The harness never touches the file system directly; it goes through a
//! [`CaseStore`]. [`FsStore`] is the real thing, [`MemoryStore`] keeps files in
//! a map so runs can be observed without disk access.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where case files are read from and written back to.
pub trait CaseStore {
    /// Returns the full contents of `path`.
    fn read(&mut self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replaces the full contents of `path` with `bytes`.
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

impl<S: CaseStore + ?Sized> CaseStore for &mut S {
    fn read(&mut self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        (**self).write(path, bytes)
    }
}

// =============================================================================
// FILE SYSTEM
// =============================================================================

/// Reads and writes real files.
///
/// Writes truncate the file and then write the new bytes in place. There is
/// no temp file and rename, so a crash mid-write can leave a truncated file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl CaseStore for FsStore {
    fn read(&mut self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        fs::write(path, bytes)
    }
}

// =============================================================================
// IN MEMORY
// =============================================================================

/// Map-backed store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: HashMap<PathBuf, Vec<u8>>,
    writes: usize,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes fail with `PermissionDenied`.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Contents of `path` as text, if present and valid UTF-8.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files
            .get(path.as_ref())
            .and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl CaseStore for MemoryStore {
    fn read(&mut self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such case file: {}", path.display()),
            )
        })
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            ));
        }
        self.files.insert(path.to_path_buf(), bytes.to_vec());
        self.writes += 1;
        Ok(())
    }
}
