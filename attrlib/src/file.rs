use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// A caller owned reference to a file whose attributes are inspected or changed.
pub trait FileRef {
    /// Path of the referenced file.
    fn path(&self) -> &Path;

    /// Reload any metadata the reference caches. Called after attributes were written.
    fn refresh(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl FileRef for Path {
    fn path(&self) -> &Path {
        self
    }
}

impl FileRef for PathBuf {
    fn path(&self) -> &Path {
        self.as_path()
    }
}

/// A file path together with a cached snapshot of its metadata.
///
/// The snapshot is taken on [TrackedFile::open] and only renewed by
/// [FileRef::refresh], which the attribute operations call after every write.
#[derive(Debug, Clone)]
pub struct TrackedFile {
    path: PathBuf,
    metadata: Metadata,
}

impl TrackedFile {
    /// Creates a new TrackedFile and reads the initial metadata snapshot.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = fs::metadata(&path)?;
        Ok(Self { path, metadata })
    }

    /// Returns the cached metadata snapshot
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl FileRef for TrackedFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.metadata = fs::metadata(&self.path)?;
        debug!("Refreshed metadata of {}", self.path.display());
        Ok(())
    }
}
