use tracing::debug;

use crate::attribute::FileAttributes;
use crate::file::FileRef;
use crate::store::{AttributeStore, NativeStore};
use crate::{Error, Result};

/// Inspects and clears attribute flags of single files through an [AttributeStore].
///
/// Attributes are read fresh on every call, nothing is cached in between.
#[derive(Debug, Default, Clone)]
pub struct AttributeHelper<S = NativeStore> {
    store: S,
}

impl AttributeHelper<NativeStore> {
    /// Creates a helper working on the host file system.
    pub fn native() -> Self {
        Self { store: NativeStore }
    }
}

impl<S: AttributeStore> AttributeHelper<S> {
    /// Creates a new helper using the given attribute store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the current attribute flags of the file.
    pub fn attributes<F: FileRef + ?Sized>(&self, file: &F) -> Result<FileAttributes> {
        self.store
            .read(file.path())
            .map_err(|err| Error::from_io(file.path(), err))
    }

    /// Returns `true` if at least one of `flags` is set on the file.
    pub fn has_any_of<F: FileRef + ?Sized>(&self, file: &F, flags: FileAttributes) -> Result<bool> {
        Ok(self.attributes(file)?.has_any_of(flags))
    }

    /// Returns `true` if all of `flags` are set on the file.
    pub fn has_all_of<F: FileRef + ?Sized>(&self, file: &F, flags: FileAttributes) -> Result<bool> {
        Ok(self.attributes(file)?.has_all_of(flags))
    }

    /// Clears `flags` on the file and refreshes the cached metadata of `file`.
    ///
    /// If none of `flags` is set nothing is written and nothing is refreshed.
    pub fn clear_flags<F: FileRef + ?Sized>(&self, file: &mut F, flags: FileAttributes) -> Result<()> {
        let current = self.attributes(file)?;
        let updated = current.cleared(flags);
        if updated == current {
            debug!(
                "Attributes of {} already clear of {flags}, skipping write",
                file.path().display()
            );
            return Ok(());
        }

        self.store
            .write(file.path(), updated)
            .map_err(|err| Error::from_io(file.path(), err))?;
        debug!(
            "Changed attributes of {} from {current} to {updated}",
            file.path().display()
        );
        file.refresh().map_err(|err| Error::from_io(file.path(), err))
    }

    /// Clears the read-only and the archive flag.
    pub fn clear_read_only_and_archive<F: FileRef + ?Sized>(&self, file: &mut F) -> Result<()> {
        self.clear_flags(file, FileAttributes::READ_ONLY | FileAttributes::ARCHIVE)
    }
}
