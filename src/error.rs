use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in the `gztree` crate.
///
/// Every variant carries the path that was being worked on so that the
/// caller can tell which file or directory stopped the run.
#[derive(Debug, Error)]
pub enum UnpackError {
    /// An I/O error occurred while opening, creating or writing a file or directory.
    #[error("I/O error on path '{}': {source}", path.display())]
    Io { source: std::io::Error, path: PathBuf },

    /// The directory walk could not read an entry (missing root, permission denied, ...).
    #[error("Could not traverse '{}': {source}", path.display())]
    Walk { source: walkdir::Error, path: PathBuf },

    /// The gzip stream of an input file is corrupt or truncated.
    #[error("Could not decompress '{}': {source}", path.display())]
    Decompress { source: std::io::Error, path: PathBuf },

    /// A visited directory did not lie under the input root.
    #[error("Could not strip prefix '{}' from path '{}'", prefix.display(), path.display())]
    StripPrefix { prefix: PathBuf, path: PathBuf },

    /// A required setting was given neither on the command line nor in the environment.
    #[error("Missing {0}: pass it as an argument or set the environment variable")]
    MissingSetting(&'static str),
}

impl UnpackError {
    /// The path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            UnpackError::Io { path, .. }
            | UnpackError::Walk { path, .. }
            | UnpackError::Decompress { path, .. }
            | UnpackError::StripPrefix { path, .. } => Some(path),
            UnpackError::MissingSetting(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, UnpackError>;
