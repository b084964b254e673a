//! # Tree Decompressor
//!
//! Walks the input root, recreates every directory under the output root and
//! inflates each `.csv.gz` file next to its mirrored location with the `.gz`
//! stripped. The run is sequential and stops at the first error; files that
//! were finished before the error stay on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::UnpackConfig;
use crate::decompress::decompress_file;
use crate::error::{Result, UnpackError};
use crate::mirror::{mirror_dir, output_file_name, relative_dir};
use crate::progress::{FileEvent, UnpackSummary};

/// Decompresses the whole tree without reporting individual files.
pub fn run(config: &UnpackConfig) -> Result<UnpackSummary> {
    run_with_progress(config, |_| Ok(()))
}

/// Decompresses the whole tree, calling `on_file` after every finished file.
/// An error returned by `on_file` ends the run like any other error.
pub fn run_with_progress<F>(config: &UnpackConfig, mut on_file: F) -> Result<UnpackSummary>
where
    F: FnMut(&FileEvent) -> Result<()>,
{
    let input_root = config.input_root();
    let output_root = config.output_root();
    let started = Instant::now();
    let mut summary = UnpackSummary::default();

    if !input_root.is_dir() && input_root.exists() {
        return Err(UnpackError::Io {
            source: io::Error::new(io::ErrorKind::InvalidInput, "input root is not a directory"),
            path: input_root.to_path_buf(),
        });
    }

    info!(input = %input_root.display(), output = %output_root.display(), "starting decompression");

    // The output tree may live inside the input tree; never walk into it.
    // Compared by location, so `.` + `out` still matches `./out`.
    let output_location = if input_root.is_dir() {
        let root = mirror_dir(output_root, Path::new(""))?;
        Some(canonical(&root)?)
    } else {
        None
    };
    let walker = WalkDir::new(input_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_output_root(e, output_location.as_deref()));

    for entry in walker {
        let entry = entry.map_err(|source| {
            let path = source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| input_root.to_path_buf());
            UnpackError::Walk { source, path }
        })?;

        let file_type = entry.file_type();
        if file_type.is_dir() {
            let relative = relative_dir(input_root, entry.path())?;
            let target = mirror_dir(output_root, &relative)?;
            summary.directories += 1;
            debug!(dir = %target.display(), "mirrored directory");
        } else if is_regular_file(&entry) {
            match target_for(input_root, output_root, &entry)? {
                Some(output) => {
                    let bytes = decompress_file(entry.path(), &output)?;
                    let event = FileEvent {
                        input: entry.path().to_path_buf(),
                        output,
                        bytes,
                    };
                    summary.record_file(&event);
                    on_file(&event)?;
                }
                None => summary.skipped += 1,
            }
        } else {
            // dangling links, links to directories, sockets, fifos
            summary.skipped += 1;
        }
    }

    summary.elapsed = started.elapsed();
    info!(
        directories = summary.directories,
        files = summary.files,
        skipped = summary.skipped,
        bytes = summary.bytes_written,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "decompression finished"
    );
    Ok(summary)
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|source| UnpackError::Io {
        source,
        path: path.to_path_buf(),
    })
}

/// True for the directory the mirror is being written to. Only real
/// directories below the input root are checked.
fn is_output_root(entry: &DirEntry, output_location: Option<&Path>) -> bool {
    let Some(output_location) = output_location else {
        return false;
    };
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    fs::canonicalize(entry.path()).map_or(false, |p| p == output_location)
}

/// Regular files and symlinks pointing at regular files. Links to
/// directories are not followed.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Output path for a qualifying file, `None` for anything else.
fn target_for(input_root: &Path, output_root: &Path, entry: &DirEntry) -> Result<Option<PathBuf>> {
    let Some(out_name) = entry.file_name().to_str().and_then(output_file_name) else {
        return Ok(None);
    };
    let parent = entry.path().parent().unwrap_or(input_root);
    let relative = relative_dir(input_root, parent)?;
    Ok(Some(output_root.join(relative).join(out_name)))
}
