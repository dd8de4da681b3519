use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading or saving a point file.
#[derive(thiserror::Error, Debug)]
pub enum PointCloudError {
    /// The file could not be opened for reading.
    #[error("cannot open file: {}", path.display())]
    Open {
        /// The path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file was opened but reading its content failed.
    #[error("cannot read file: {}", path.display())]
    Read {
        /// The path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file could not be created or truncated for writing.
    #[error("cannot open file for writing: {}", path.display())]
    Create {
        /// The path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file was created but writing the points failed.
    #[error("cannot write file: {}", path.display())]
    Write {
        /// The path of the file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl PointCloudError {
    /// The path of the file this error relates to.
    pub fn path(&self) -> &Path {
        match self {
            PointCloudError::Open { path, .. }
            | PointCloudError::Read { path, .. }
            | PointCloudError::Create { path, .. }
            | PointCloudError::Write { path, .. } => path,
        }
    }
}
