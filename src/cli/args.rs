//! Command line argument parsing for the alphadex CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::mapreduce::config::{EmptyLetterPolicy, PipelineConfig};

/// Alphadex - build a per-letter inverted index with a map/reduce thread pool
#[derive(Parser, Debug, Clone)]
#[command(name = "alphadex")]
#[command(about = "Build a per-letter inverted index with a map/reduce thread pool")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AlphadexArgs {
    /// Number of mapper threads
    #[arg(value_name = "NUM_MAPPERS", value_parser = clap::value_parser!(u32).range(1..))]
    pub num_mappers: u32,

    /// Number of reducer threads
    #[arg(value_name = "NUM_REDUCERS", value_parser = clap::value_parser!(u32).range(1..))]
    pub num_reducers: u32,

    /// Manifest file: a file count followed by one path per line
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Directory receiving the a.txt .. z.txt output files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Write the "no words" line to every empty letter file, not only when a
    /// reducer's whole letter range is empty
    #[arg(long)]
    pub per_letter_fallback: bool,

    /// Report format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl AlphadexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the pipeline configuration described by these arguments.
    pub fn pipeline_config(&self) -> PipelineConfig {
        let policy = if self.per_letter_fallback {
            EmptyLetterPolicy::PerLetter
        } else {
            EmptyLetterPolicy::ReducerRange
        };

        PipelineConfig::new(self.num_mappers as usize, self.num_reducers as usize)
            .with_output_dir(&self.output_dir)
            .with_empty_letter_policy(policy)
    }
}

/// Output formats for the run report
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_positional_arguments() {
        let args = AlphadexArgs::try_parse_from(["alphadex", "4", "2", "manifest.txt"]).unwrap();

        assert_eq!(args.num_mappers, 4);
        assert_eq!(args.num_reducers, 2);
        assert_eq!(args.manifest, PathBuf::from("manifest.txt"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(!args.per_letter_fallback);
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(AlphadexArgs::try_parse_from(["alphadex"]).is_err());
        assert!(AlphadexArgs::try_parse_from(["alphadex", "4", "2"]).is_err());
        assert!(AlphadexArgs::try_parse_from(["alphadex", "4", "2", "m.txt", "extra"]).is_err());
    }

    #[test]
    fn test_counts_must_be_positive() {
        assert!(AlphadexArgs::try_parse_from(["alphadex", "0", "2", "m.txt"]).is_err());
        assert!(AlphadexArgs::try_parse_from(["alphadex", "2", "0", "m.txt"]).is_err());
        assert!(AlphadexArgs::try_parse_from(["alphadex", "-1", "2", "m.txt"]).is_err());
        assert!(AlphadexArgs::try_parse_from(["alphadex", "two", "2", "m.txt"]).is_err());
    }

    #[test]
    fn test_options_and_config() {
        let args = AlphadexArgs::try_parse_from([
            "alphadex",
            "3",
            "5",
            "m.txt",
            "--output-dir",
            "out",
            "--per-letter-fallback",
            "--format",
            "json",
        ])
        .unwrap();

        let config = args.pipeline_config();
        assert_eq!(config.num_mappers, 3);
        assert_eq!(config.num_reducers, 5);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.empty_letter_policy, EmptyLetterPolicy::PerLetter);
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_verbosity_levels() {
        let args = AlphadexArgs::try_parse_from(["alphadex", "1", "1", "m.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = AlphadexArgs::try_parse_from(["alphadex", "-vv", "1", "1", "m.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            AlphadexArgs::try_parse_from(["alphadex", "-vvv", "-q", "1", "1", "m.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
