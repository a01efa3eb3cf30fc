use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in the `zipdir` crate.
///
/// Every variant carries the filesystem path the failure happened on, so the
/// single message printed by the binary is enough to locate the problem.
#[derive(Error, Debug)]
pub enum PackError {
    /// An I/O error occurred, typically while listing, stat-ing, reading or
    /// creating a file. Includes the path where the error happened.
    #[error("I/O error on path '{}': {}", .path.display(), .source)]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    /// The input path exists but is not a directory.
    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// The input directory has no children at all, so there is nothing to
    /// pack and no archive is created.
    #[error("directory '{}' is empty, nothing to pack", .path.display())]
    EmptyDirectory { path: PathBuf },

    /// The input path has no final component to name the archive after,
    /// e.g. the filesystem root.
    #[error("cannot derive an archive name from '{}'", .path.display())]
    NoArchiveName { path: PathBuf },

    /// The zip writer rejected an entry or failed to finalize the archive.
    #[error("zip error on '{}': {}", .path.display(), .source)]
    Zip {
        source: zip::result::ZipError,
        path: PathBuf,
    },
}

impl PackError {
    /// Wraps an I/O error together with the path it occurred on.
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        PackError::Io {
            source,
            path: path.into(),
        }
    }

    /// Wraps a zip-format error together with the path being written.
    pub(crate) fn zip(source: zip::result::ZipError, path: impl Into<PathBuf>) -> Self {
        PackError::Zip {
            source,
            path: path.into(),
        }
    }
}
