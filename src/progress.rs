//! Progress reporting for a decompression run.
//!
//! The tree walker reports each finished file as a [`FileEvent`]; what happens
//! with it is up to the callback. The CLI uses [`ProgressReporter`] to print
//! the familiar `Decompressed: <input> -> <output>` line on stdout.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

/// One successfully decompressed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Decompressed size in bytes.
    pub bytes: u64,
}

impl FileEvent {
    /// The human-readable progress line for this file.
    pub fn line(&self) -> String {
        format!(
            "Decompressed: {} -> {}",
            self.input.display(),
            self.output.display()
        )
    }
}

/// Totals for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnpackSummary {
    /// Directories visited and mirrored, the input root included.
    pub directories: u64,
    /// Files decompressed.
    pub files: u64,
    /// Decompressed bytes written across all files.
    pub bytes_written: u64,
    /// Non-directory entries that were not decompressed: names not ending
    /// in `.csv.gz`, non-UTF-8 names, dangling links and links to directories.
    pub skipped: u64,
    pub elapsed: Duration,
}

impl UnpackSummary {
    pub(crate) fn record_file(&mut self, event: &FileEvent) {
        self.files += 1;
        self.bytes_written += event.bytes;
    }

    /// Decompressed throughput in MB/s.
    pub fn speed_mbps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.bytes_written as f64 / (1024.0 * 1024.0)) / secs
        } else {
            0.0
        }
    }
}

/// Writes one progress line per file to the given sink (stdout for the CLI).
pub struct ProgressReporter<W: Write> {
    out: W,
    enabled: bool,
}

impl ProgressReporter<io::Stdout> {
    pub fn stdout(enabled: bool) -> Self {
        Self::new(io::stdout(), enabled)
    }
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    /// Print the line for `event`.
    pub fn report(&mut self, event: &FileEvent) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        writeln!(self.out, "{}", event.line())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(bytes: u64) -> FileEvent {
        FileEvent {
            input: PathBuf::from("in/b/patients.csv.gz"),
            output: PathBuf::from("out/b/patients.csv"),
            bytes,
        }
    }

    #[test]
    fn line_format() {
        assert_eq!(
            event(16).line(),
            "Decompressed: in/b/patients.csv.gz -> out/b/patients.csv"
        );
    }

    #[test]
    fn reporter_writes_one_line_per_event() {
        let mut reporter = ProgressReporter::new(Vec::new(), true);
        reporter.report(&event(1)).unwrap();
        reporter.report(&event(2)).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.starts_with("Decompressed: ")));
    }

    #[test]
    fn quiet_reporter_writes_nothing() {
        let mut reporter = ProgressReporter::new(Vec::new(), false);
        reporter.report(&event(1)).unwrap();
        assert!(reporter.into_inner().is_empty());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn write_failure_is_returned() {
        let mut reporter = ProgressReporter::new(ClosedPipe, true);
        let err = reporter.report(&event(1)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let mut quiet = ProgressReporter::new(ClosedPipe, false);
        assert!(quiet.report(&event(1)).is_ok());
    }

    #[test]
    fn summary_accumulates() {
        let mut summary = UnpackSummary::default();
        summary.record_file(&event(1024 * 1024));
        summary.record_file(&event(1024 * 1024));
        summary.elapsed = Duration::from_secs(2);
        assert_eq!(summary.files, 2);
        assert_eq!(summary.bytes_written, 2 * 1024 * 1024);
        assert!((summary.speed_mbps() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_elapsed_has_zero_speed() {
        let summary = UnpackSummary {
            bytes_written: 10,
            ..Default::default()
        };
        assert_eq!(summary.speed_mbps(), 0.0);
    }
}
