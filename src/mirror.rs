//! Path mapping between the input tree and its mirror under the output root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, UnpackError};

/// Files whose names end with this literal are decompressed.
pub const QUALIFYING_SUFFIX: &str = ".csv.gz";
/// The part of a qualifying name that is removed to form the output name.
pub const STRIPPED_SUFFIX: &str = ".gz";

/// Returns true if `name` ends with `.csv.gz` (case sensitive).
pub fn is_qualifying(name: &str) -> bool {
    name.ends_with(QUALIFYING_SUFFIX)
}

/// Output name for a qualifying file: `patients.csv.gz` becomes `patients.csv`.
pub fn output_file_name(name: &str) -> Option<&str> {
    if !is_qualifying(name) {
        return None;
    }
    name.strip_suffix(STRIPPED_SUFFIX)
}

/// Path of `dir` relative to `input_root`; empty for the root itself.
pub fn relative_dir(input_root: &Path, dir: &Path) -> Result<PathBuf> {
    dir.strip_prefix(input_root)
        .map(Path::to_path_buf)
        .map_err(|_| UnpackError::StripPrefix {
            prefix: input_root.to_path_buf(),
            path: dir.to_path_buf(),
        })
}

/// Creates `output_root/relative` (and any missing parents) and returns it.
/// An existing directory is not an error.
pub fn mirror_dir(output_root: &Path, relative: &Path) -> Result<PathBuf> {
    let target = if relative.as_os_str().is_empty() {
        output_root.to_path_buf()
    } else {
        output_root.join(relative)
    };
    fs::create_dir_all(&target).map_err(|source| UnpackError::Io {
        source,
        path: target.clone(),
    })?;
    Ok(target)
}
