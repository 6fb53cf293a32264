//! [![github]](https://github.com/ponchofiesta/fileattr-rs)&ensp;[![crates-io]](https://crates.io/crates/attrlib)&ensp;[![docs-rs]](https://docs.rs/attrlib)
//!
//! [github]: https://img.shields.io/badge/github-8da0cb?style=for-the-badge&labelColor=555555&logo=github
//! [crates-io]: https://img.shields.io/badge/crates.io-fc8d62?style=for-the-badge&labelColor=555555&logo=rust
//! [docs-rs]: https://img.shields.io/badge/docs.rs-66c2a5?style=for-the-badge&labelColor=555555&logo=docs.rs
//!
//! <br>
//!
//! # Examples
//!
//! Check whether a file is read-only or marked for archiving:
//!
//! ```no_compile
//! let flagged = attrlib::has_any_of(Path::new("file.txt"), FileAttributes::READ_ONLY | FileAttributes::ARCHIVE)?;
//! ```
//!
//! Clear both flags and keep a cached metadata snapshot up to date:
//!
//! ```no_compile
//! let mut file = TrackedFile::open("file.txt")?;
//! attrlib::clear_read_only_and_archive(&mut file)?;
//! println!("{}", file.metadata().permissions().readonly());
//! ```
//!

pub mod attribute;
pub mod error;
pub mod file;
pub mod helper;
pub mod store;

pub use attribute::FileAttributes;
pub use error::{Error, Result};
pub use file::{FileRef, TrackedFile};
pub use helper::AttributeHelper;
pub use store::{AttributeStore, NativeStore};

/// Returns the current attribute flags of the file.
pub fn attributes<F: FileRef + ?Sized>(file: &F) -> Result<FileAttributes> {
    AttributeHelper::native().attributes(file)
}

/// Returns `true` if at least one of `flags` is set on the file.
pub fn has_any_of<F: FileRef + ?Sized>(file: &F, flags: FileAttributes) -> Result<bool> {
    AttributeHelper::native().has_any_of(file, flags)
}

/// Returns `true` if all of `flags` are set on the file.
pub fn has_all_of<F: FileRef + ?Sized>(file: &F, flags: FileAttributes) -> Result<bool> {
    AttributeHelper::native().has_all_of(file, flags)
}

/// Clears `flags` on the file. Writes only if at least one of them is set.
pub fn clear_flags<F: FileRef + ?Sized>(file: &mut F, flags: FileAttributes) -> Result<()> {
    AttributeHelper::native().clear_flags(file, flags)
}

/// Clears the read-only and the archive flag of the file.
pub fn clear_read_only_and_archive<F: FileRef + ?Sized>(file: &mut F) -> Result<()> {
    AttributeHelper::native().clear_read_only_and_archive(file)
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::path::Path;
    use std::time::Duration;

    use filetime::FileTime;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_file_fails_every_operation() {
        let temp_dir = tempdir().unwrap();
        let mut path = temp_dir.path().join("missing");
        let flags = FileAttributes::READ_ONLY;

        assert!(matches!(has_any_of(&path, flags), Err(Error::NotFound(_))));
        assert!(matches!(has_all_of(&path, flags), Err(Error::NotFound(_))));
        assert!(matches!(clear_flags(&mut path, flags), Err(Error::NotFound(_))));
        assert!(matches!(
            clear_read_only_and_archive(&mut path),
            Err(Error::NotFound(_))
        ));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn path_through_regular_file_is_not_found() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("file.txt");
        File::create(&file).unwrap();
        let mut path = file.join("x");

        assert!(matches!(has_any_of(&path, FileAttributes::READ_ONLY), Err(Error::NotFound(_))));
        assert!(matches!(
            clear_read_only_and_archive(&mut path),
            Err(Error::NotFound(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn writable_file_has_nothing_to_clear() {
        use std::os::unix::fs::MetadataExt;

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("file");
        File::create(&path).unwrap();
        let mut tracked = TrackedFile::open(&path).unwrap();
        std::fs::write(&path, b"abc").unwrap();
        // Outlast coarse timestamp granularity so any attribute write would move ctime
        std::thread::sleep(Duration::from_millis(1100));
        let before = path.metadata().unwrap();

        assert!(!has_any_of(Path::new(&path), FileAttributes::READ_ONLY).unwrap());
        clear_read_only_and_archive(&mut tracked).unwrap();
        clear_read_only_and_archive(&mut tracked).unwrap();

        let after = path.metadata().unwrap();
        assert_eq!(
            (before.ctime(), before.ctime_nsec()),
            (after.ctime(), after.ctime_nsec())
        );
        assert_eq!(
            FileTime::from_last_modification_time(&before),
            FileTime::from_last_modification_time(&after)
        );
        // No write, so the cached snapshot is still the one taken before the data was written
        assert_eq!(tracked.metadata().len(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn read_only_file_is_cleared_and_tracked_file_refreshed() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("file");
        File::create(&path).unwrap();
        let mut permissions = path.metadata().unwrap().permissions();
        permissions.set_readonly(true);
        std::fs::set_permissions(&path, permissions).unwrap();

        let mut tracked = TrackedFile::open(&path).unwrap();
        assert!(tracked.metadata().permissions().readonly());
        assert!(has_any_of(&tracked, FileAttributes::READ_ONLY).unwrap());
        assert!(has_all_of(&tracked, FileAttributes::READ_ONLY).unwrap());
        assert!(!has_all_of(&tracked, FileAttributes::READ_ONLY | FileAttributes::ARCHIVE).unwrap());

        clear_read_only_and_archive(&mut tracked).unwrap();

        assert!(!tracked.metadata().permissions().readonly());
        assert!(!has_any_of(&tracked, FileAttributes::READ_ONLY).unwrap());
        assert!(!has_any_of(&tracked, FileAttributes::ARCHIVE).unwrap());
        assert_eq!(attributes(&path).unwrap(), FileAttributes::empty());
    }
}
