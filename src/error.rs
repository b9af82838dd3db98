//! Global error handling for viewfs
//!
//! Only failures that leave a classification result unusable are fatal.
//! Everything else degrades locally: unreadable configs become empty,
//! unreadable directory contents become `has_access = false`, and a
//! non-directory handed to the lister yields an empty listing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for viewfs operations
#[derive(Error, Debug)]
pub enum Error {
    /// The entry's own metadata could not be read
    #[error("failed to read metadata for {}: {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },

    /// A symlink's stored target could not be read
    #[error("failed to read symlink target of {}: {source}", path.display())]
    SymlinkTarget { path: PathBuf, source: io::Error },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for viewfs operations
pub type Result<T> = std::result::Result<T, Error>;
