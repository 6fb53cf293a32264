//! Access to the attribute flags kept by the host file system.

use std::io;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::attribute::FileAttributes;

/// Reads and writes the attribute flag set of a file.
#[cfg_attr(test, automock)]
pub trait AttributeStore {
    /// Read the current attribute flags of `path`.
    fn read(&self, path: &Path) -> io::Result<FileAttributes>;

    /// Replace the attribute flags of `path` with `attributes`.
    fn write(&self, path: &Path, attributes: FileAttributes) -> io::Result<()>;
}

/// Attribute store backed by the metadata API of the host operating system.
///
/// On Windows all attribute bits are read and written as they are. On Unix
/// only [FileAttributes::READ_ONLY] exists, derived from the write bits of
/// the file mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeStore;

#[cfg(windows)]
impl AttributeStore for NativeStore {
    fn read(&self, path: &Path) -> io::Result<FileAttributes> {
        use std::os::windows::fs::MetadataExt;

        let metadata = std::fs::metadata(path)?;
        Ok(FileAttributes::from_bits_retain(metadata.file_attributes()))
    }

    fn write(&self, path: &Path, attributes: FileAttributes) -> io::Result<()> {
        use std::os::windows::ffi::OsStrExt;
        use windows_sys::Win32::Storage::FileSystem::SetFileAttributesW;

        let wide: Vec<u16> = path
            .as_os_str()
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();
        // Safety: `wide` is a NUL terminated UTF-16 string living across the call
        let result = unsafe { SetFileAttributesW(wide.as_ptr(), attributes.bits()) };
        if result == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

#[cfg(unix)]
mod unix {
    use std::fs;
    use std::io;
    use std::path::Path;

    use file_mode::ModePath;

    /// All write permission bits (`--w--w--w-`).
    pub(super) const WRITE_BITS: u32 = 0o222;
    /// Write permission bit of the owner.
    pub(super) const OWNER_WRITE: u32 = 0o200;

    /// Turn a failed mode call into the I/O error of the underlying metadata access.
    fn mode_error<E: std::fmt::Display>(path: &Path, error: E) -> io::Error {
        match fs::metadata(path) {
            Err(io_error) => io_error,
            Ok(_) => io::Error::other(error.to_string()),
        }
    }

    pub(super) fn mode(path: &Path) -> io::Result<u32> {
        path.mode()
            .map(|mode| mode.mode())
            .map_err(|err| mode_error(path, err))
    }

    pub(super) fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
        path.set_mode(mode)
            .map(|_| ())
            .map_err(|err| mode_error(path, err))
    }
}

#[cfg(unix)]
impl AttributeStore for NativeStore {
    fn read(&self, path: &Path) -> io::Result<FileAttributes> {
        let mode = unix::mode(path)?;
        if mode & unix::WRITE_BITS == 0 {
            Ok(FileAttributes::READ_ONLY)
        } else {
            Ok(FileAttributes::empty())
        }
    }

    fn write(&self, path: &Path, attributes: FileAttributes) -> io::Result<()> {
        let mode = unix::mode(path)?;
        let new_mode = if attributes.contains(FileAttributes::READ_ONLY) {
            mode & !unix::WRITE_BITS
        } else if mode & unix::WRITE_BITS == 0 {
            mode | unix::OWNER_WRITE
        } else {
            mode
        };
        if new_mode != mode {
            unix::set_mode(path, new_mode)?;
        }
        Ok(())
    }
}
