//! Manifest reading.
//!
//! A manifest lists the files to index: the first line holds a count `N`, and
//! the next `N` lines each hold one path. Paths are taken as whole lines, so
//! they may contain spaces. Anything after the `N`-th path is ignored.
//!
//! ```text
//! 3
//! books/alice.txt
//! books/moby dick.txt
//! books/ulysses.txt
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{AlphadexError, Result};

/// Read the manifest at `path` and return its file paths in listed order.
pub fn read_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        AlphadexError::manifest(format!("cannot open manifest {}: {e}", path.display()))
    })?;

    let paths = parse_manifest(BufReader::new(file))?;
    debug!("Manifest {} lists {} files", path.display(), paths.len());

    Ok(paths)
}

/// Parse manifest content from any buffered reader.
pub fn parse_manifest<R: BufRead>(reader: R) -> Result<Vec<PathBuf>> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(AlphadexError::manifest("manifest is empty")),
    };
    let count: usize = header.trim().parse().map_err(|_| {
        AlphadexError::manifest(format!(
            "first line must be a non-negative file count, got {:?}",
            header.trim()
        ))
    })?;

    let mut paths = Vec::with_capacity(count);
    for position in 1..=count {
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(AlphadexError::manifest(format!(
                    "manifest declares {count} files but ends after {}",
                    position - 1
                )));
            }
        };
        let line = line.strip_suffix('\r').unwrap_or(&line);
        paths.push(PathBuf::from(line));
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_manifest() {
        let content = "3\nfirst.txt\nsecond file.txt\ndir/third.txt\n";
        let paths = parse_manifest(Cursor::new(content)).unwrap();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("first.txt"),
                PathBuf::from("second file.txt"),
                PathBuf::from("dir/third.txt"),
            ]
        );
    }

    #[test]
    fn test_crlf_and_padded_count() {
        let content = "  2 \r\na.txt\r\nb.txt\r\n";
        let paths = parse_manifest(Cursor::new(content)).unwrap();

        assert_eq!(paths, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn test_extra_lines_are_ignored() {
        let content = "1\nkeep.txt\nignored.txt\n";
        let paths = parse_manifest(Cursor::new(content)).unwrap();

        assert_eq!(paths, vec![PathBuf::from("keep.txt")]);
    }

    #[test]
    fn test_zero_count() {
        let paths = parse_manifest(Cursor::new("0\n")).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_missing_final_newline() {
        let paths = parse_manifest(Cursor::new("1\nlast.txt")).unwrap();
        assert_eq!(paths, vec![PathBuf::from("last.txt")]);
    }

    #[test]
    fn test_invalid_count() {
        for content in ["", "abc\nfile.txt\n", "-1\n", "1.5\nfile.txt\n"] {
            let result = parse_manifest(Cursor::new(content));
            assert!(
                matches!(result, Err(AlphadexError::Manifest(_))),
                "expected manifest error for {content:?}"
            );
        }
    }

    #[test]
    fn test_truncated_manifest() {
        let result = parse_manifest(Cursor::new("3\none.txt\ntwo.txt\n"));

        match result {
            Err(AlphadexError::Manifest(msg)) => assert!(msg.contains("ends after 2")),
            other => panic!("Expected manifest error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_manifest_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "2").unwrap();
        writeln!(file, "x.txt").unwrap();
        writeln!(file, "y.txt").unwrap();

        let paths = read_manifest(file.path()).unwrap();
        assert_eq!(paths, vec![PathBuf::from("x.txt"), PathBuf::from("y.txt")]);
    }

    #[test]
    fn test_read_missing_manifest() {
        let result = read_manifest("/definitely/not/a/manifest.txt");
        assert!(matches!(result, Err(AlphadexError::Manifest(_))));
    }
}
