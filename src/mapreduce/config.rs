//! Configuration for the indexing pipeline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AlphadexError, Result};

/// Decides when a letter file receives the "no words" fallback line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyLetterPolicy {
    /// The fallback is written to every letter of a reducer only when the
    /// reducer's whole letter range matched no words. Letters without words
    /// inside a non-empty range are left as empty files.
    #[default]
    ReducerRange,

    /// The fallback is written to each letter that matched no words.
    PerLetter,
}

/// Configuration for one indexing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Number of mapper threads.
    pub num_mappers: usize,

    /// Number of reducer threads.
    pub num_reducers: usize,

    /// Directory receiving the `a.txt` .. `z.txt` output files.
    pub output_dir: PathBuf,

    /// When to write the empty-letter fallback line.
    pub empty_letter_policy: EmptyLetterPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            num_mappers: num_cpus::get(),
            num_reducers: num_cpus::get(),
            output_dir: PathBuf::from("."),
            empty_letter_policy: EmptyLetterPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with explicit worker counts.
    pub fn new(num_mappers: usize, num_reducers: usize) -> Self {
        Self {
            num_mappers,
            num_reducers,
            ..Default::default()
        }
    }

    /// Set the output directory.
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the empty-letter policy.
    pub fn with_empty_letter_policy(mut self, policy: EmptyLetterPolicy) -> Self {
        self.empty_letter_policy = policy;
        self
    }

    /// Total number of worker threads, which is also the barrier size.
    pub fn total_threads(&self) -> usize {
        self.num_mappers + self.num_reducers
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_mappers == 0 {
            return Err(AlphadexError::config("num_mappers must be at least 1"));
        }

        if self.num_reducers == 0 {
            return Err(AlphadexError::config("num_reducers must be at least 1"));
        }

        Ok(())
    }
}
