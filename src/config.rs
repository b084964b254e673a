//! Run configuration for the tree decompressor.

use std::path::{Path, PathBuf};

use crate::error::{Result, UnpackError};

/// Environment variable consulted when no input directory is given on the command line.
pub const INPUT_ENV: &str = "GZTREE_INPUT";
/// Environment variable consulted when no output directory is given on the command line.
pub const OUTPUT_ENV: &str = "GZTREE_OUTPUT";

/// The two roots a run works between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackConfig {
    input_root: PathBuf,
    output_root: PathBuf,
}

impl UnpackConfig {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
        }
    }

    /// Builds the configuration from optional command-line values.
    ///
    /// Priority:
    /// 1. the value given on the command line.
    /// 2. `GZTREE_INPUT` / `GZTREE_OUTPUT` from the environment.
    pub fn from_opt_or_env(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<Self> {
        let input_root = setting_from_opt_or_env(input, INPUT_ENV)
            .ok_or(UnpackError::MissingSetting("input directory"))?;
        let output_root = setting_from_opt_or_env(output, OUTPUT_ENV)
            .ok_or(UnpackError::MissingSetting("output directory"))?;
        Ok(Self::new(input_root, output_root))
    }

    /// Existing directory that is walked for `.csv.gz` files.
    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    /// Directory the mirrored tree is written to. Created if missing.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }
}

fn setting_from_opt_or_env(value: Option<PathBuf>, var: &str) -> Option<PathBuf> {
    value.or_else(|| {
        std::env::var_os(var)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}
