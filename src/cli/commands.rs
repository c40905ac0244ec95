//! Command implementation for the alphadex CLI.

use std::io;

use log::info;

use crate::cli::args::AlphadexArgs;
use crate::cli::output::output_report;
use crate::error::Result;
use crate::manifest::read_manifest;
use crate::mapreduce::engine::IndexingPipeline;

/// Execute a CLI invocation.
///
/// Manifest and configuration errors are returned before any worker thread
/// starts.
pub fn execute_command(args: AlphadexArgs) -> Result<()> {
    let paths = read_manifest(&args.manifest)?;
    info!(
        "Read {} paths from manifest {}",
        paths.len(),
        args.manifest.display()
    );

    let pipeline = IndexingPipeline::new(args.pipeline_config())?;
    let report = pipeline.run(paths)?;

    output_report(&mut io::stdout().lock(), &report, &args)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;
    use crate::error::AlphadexError;

    #[test]
    fn test_missing_manifest_is_fatal() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let args = AlphadexArgs::try_parse_from([
            "alphadex".into(),
            "1".into(),
            "1".into(),
            dir.path().join("missing.txt").into_os_string(),
            "-q".into(),
            "-o".into(),
            out.clone().into_os_string(),
        ])
        .unwrap();

        assert!(matches!(
            execute_command(args),
            Err(AlphadexError::Manifest(_))
        ));
        // Nothing runs, so the output directory is never created.
        assert!(!out.exists());
    }

    #[test]
    fn test_execute_writes_letter_files() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, "quick quiet").unwrap();
        let manifest = dir.path().join("manifest.txt");
        fs::write(&manifest, format!("1\n{}\n", input.display())).unwrap();
        let out = dir.path().join("out");

        let args = AlphadexArgs::try_parse_from([
            PathBuf::from("alphadex").into_os_string(),
            "2".into(),
            "3".into(),
            manifest.into_os_string(),
            "-q".into(),
            "--output-dir".into(),
            out.clone().into_os_string(),
        ])
        .unwrap();

        execute_command(args).unwrap();
        assert_eq!(
            fs::read_to_string(out.join("q.txt")).unwrap(),
            "quick:[1]\nquiet:[1]\n"
        );
    }
}
