//! # gztree Core Library
//!
//! This crate decompresses a dataset shipped as a directory tree of `.csv.gz`
//! files. Every directory under the input root is recreated under the output
//! root and every `name.csv.gz` is inflated to `name.csv` in its mirrored
//! directory. Other files are ignored.
//!
//! It is designed to be used by the `gztree` command-line application, but the
//! library API can be called directly.
//!
//! ## Key Modules
//!
//! - [`tree`]: The traversal that drives a run.
//! - [`decompress`]: Inflates a single gzip file.
//! - [`mirror`]: Maps input paths onto the output tree.
//! - [`progress`]: Per-file events and the run summary.
//!
//! ## Examples
//!
//! ```no_run
//! use gztree::{tree, UnpackConfig};
//!
//! let config = UnpackConfig::new("/data/mimic-iv", "/data/mimic-iv-decompressed");
//! let summary = tree::run_with_progress(&config, |event| {
//!     println!("{}", event.line());
//!     Ok(())
//! })?;
//! println!("{} files", summary.files);
//! # Ok::<(), gztree::UnpackError>(())
//! ```

pub mod cli;
pub mod cli_runner;
pub mod config;
pub mod decompress;
pub mod error;
pub mod mirror;
pub mod progress;
pub mod tree;

pub use config::UnpackConfig;
pub use error::UnpackError;
pub use progress::{FileEvent, UnpackSummary};
