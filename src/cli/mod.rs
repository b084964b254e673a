use clap::Parser;
use std::path::PathBuf;

use crate::config::UnpackConfig;
use crate::error::UnpackError;

/// Decompress every `.csv.gz` file under INPUT into a mirrored tree under OUTPUT.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory tree to scan for `.csv.gz` files. Falls back to GZTREE_INPUT.
    pub input: Option<PathBuf>,

    /// Root of the decompressed mirror. Created if missing. Falls back to GZTREE_OUTPUT.
    pub output: Option<PathBuf>,

    /// Do not print a progress line per decompressed file.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Resolves the input and output roots from the arguments or the environment.
    pub fn config(&self) -> Result<UnpackConfig, UnpackError> {
        UnpackConfig::from_opt_or_env(self.input.clone(), self.output.clone())
    }
}

/// Parses command-line arguments using `clap`.
///
/// Returns an error if parsing fails; `--help` and `--version` are reported
/// through the same error so the caller can let clap print them.
pub fn run() -> Result<Args, Box<dyn std::error::Error>> {
    let args = Args::try_parse()?;
    Ok(args)
}
