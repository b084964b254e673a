//! # Decompression
//!
//! Inflates a single gzip file into a plain output file. The input is read
//! through a multi-member decoder so that concatenated gzip members (as
//! produced by `cat a.gz b.gz` or parallel compressors) are inflated back to
//! back, the same way the `gzip` tool reads them.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{Result, UnpackError};

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Decompresses `input` into `output`, creating or truncating the latter.
///
/// Returns the number of decompressed bytes written. On failure the output
/// file is left as far as it was written.
pub fn decompress_file(input: &Path, output: &Path) -> Result<u64> {
    let src = File::open(input).map_err(|source| UnpackError::Io {
        source,
        path: input.to_path_buf(),
    })?;
    let dst = File::create(output).map_err(|source| UnpackError::Io {
        source,
        path: output.to_path_buf(),
    })?;

    let mut decoder = MultiGzDecoder::new(BufReader::new(src));
    let mut writer = BufWriter::new(dst);
    let written = copy_inflated(&mut decoder, &mut writer, input, output)?;

    writer.flush().map_err(|source| UnpackError::Io {
        source,
        path: output.to_path_buf(),
    })?;
    Ok(written)
}

/// Like `io::copy`, but keeps read (inflate) failures apart from write failures
/// so each one is reported against the right path. `io::copy` returns a single
/// `io::Error` for both sides, which loses which file failed.
fn copy_inflated<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    input: &Path,
    output: &Path,
) -> Result<u64> {
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(UnpackError::Decompress {
                    source,
                    path: input.to_path_buf(),
                })
            }
        };
        writer.write_all(&buf[..n]).map_err(|source| UnpackError::Io {
            source,
            path: output.to_path_buf(),
        })?;
        total += n as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::fs;
    use tempfile::tempdir;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn inflates_exact_bytes() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("patients.csv.gz");
        let output = dir.path().join("patients.csv");
        fs::write(&input, gzip(b"id,name\n1,Alice\n")).unwrap();

        let written = decompress_file(&input, &output).unwrap();
        assert_eq!(written, 16);
        assert_eq!(fs::read(&output).unwrap(), b"id,name\n1,Alice\n");
    }

    #[test]
    fn truncates_existing_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("t.csv.gz");
        let output = dir.path().join("t.csv");
        fs::write(&output, vec![b'x'; 4096]).unwrap();
        fs::write(&input, gzip(b"a,b\n")).unwrap();

        decompress_file(&input, &output).unwrap();
        assert_eq!(fs::read(&output).unwrap(), b"a,b\n");
    }

    #[test]
    fn concatenated_members_are_all_inflated() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("multi.csv.gz");
        let output = dir.path().join("multi.csv");
        let mut data = gzip(b"id\n");
        data.extend(gzip(b"1\n2\n"));
        fs::write(&input, data).unwrap();

        decompress_file(&input, &output).unwrap();
        assert_eq!(fs::read(&output).unwrap(), b"id\n1\n2\n");
    }

    #[test]
    fn empty_stream_gives_empty_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.csv.gz");
        let output = dir.path().join("empty.csv");
        fs::write(&input, gzip(b"")).unwrap();

        assert_eq!(decompress_file(&input, &output).unwrap(), 0);
        assert_eq!(fs::metadata(&output).unwrap().len(), 0);
    }

    #[test]
    fn corrupt_stream_reports_input_path() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.csv.gz");
        let output = dir.path().join("bad.csv");
        fs::write(&input, b"this is not gzip at all").unwrap();

        let err = decompress_file(&input, &output).unwrap_err();
        match err {
            UnpackError::Decompress { path, .. } => assert_eq!(path, input),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn truncated_stream_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("cut.csv.gz");
        let output = dir.path().join("cut.csv");
        let full = gzip(&vec![b'z'; 100_000]);
        fs::write(&input, &full[..full.len() / 2]).unwrap();

        assert!(matches!(
            decompress_file(&input, &output),
            Err(UnpackError::Decompress { .. })
        ));
    }

    #[test]
    fn missing_input_is_io_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.csv.gz");
        let output = dir.path().join("absent.csv");

        match decompress_file(&input, &output).unwrap_err() {
            UnpackError::Io { path, .. } => assert_eq!(path, input),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!output.exists());
    }
}
