use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = core::result::Result<T, Error>;

/// General error of all attribute operations.
#[derive(Debug)]
pub enum Error {
    /// The file reference does not resolve to an existing file.
    NotFound(PathBuf),
    /// The host file system rejected reading or writing the attributes.
    PermissionDenied(PathBuf),
    /// An attribute letter could not be parsed. Provides the letter read.
    InvalidAttribute(char),
    /// Any other `std::io::Error` occured.
    IoError(io::Error),
}

impl Error {
    /// Classify an I/O error of the attribute store and attach the path it occured on.
    pub fn from_io<P: AsRef<Path>>(path: P, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
                Error::NotFound(path.as_ref().to_path_buf())
            }
            io::ErrorKind::PermissionDenied => {
                Error::PermissionDenied(path.as_ref().to_path_buf())
            }
            _ => Error::IoError(error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(io_error) => Some(io_error),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;

        match self {
            NotFound(path) => write!(f, "File not found: {}", path.display()),
            PermissionDenied(path) => write!(
                f,
                "Permission denied while accessing attributes of {}",
                path.display()
            ),
            InvalidAttribute(ch) => write!(f, "Invalid attribute '{ch}'."),
            IoError(io_error) => write!(f, "{io_error}"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::IoError(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_classifies_not_found() {
        let error = Error::from_io("missing", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(error, Error::NotFound(path) if path == Path::new("missing")));
    }

    #[test]
    fn from_io_classifies_path_through_file_as_not_found() {
        let error = Error::from_io(
            "file.txt/x",
            io::Error::from(io::ErrorKind::NotADirectory),
        );
        assert!(matches!(error, Error::NotFound(path) if path == Path::new("file.txt/x")));
    }

    #[test]
    fn from_io_classifies_permission_denied() {
        let error = Error::from_io("locked", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(error, Error::PermissionDenied(path) if path == Path::new("locked")));
    }

    #[test]
    fn from_io_passes_other_errors_through() {
        let error = Error::from_io("file", io::Error::other("disk on fire"));
        assert!(matches!(error, Error::IoError(_)));
        assert_eq!(error.to_string(), "disk on fire");
    }
}
