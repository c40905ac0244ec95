//! # Alphadex
//!
//! Builds an inverted index, mapping each word to the files containing it,
//! with a fixed two-phase map/reduce pipeline over a thread pool.
//!
//! ## Features
//!
//! - FIFO work queue with file IDs that always match manifest order
//! - Mappers that aggregate privately and merge once into a shared index
//! - A single barrier separating the map phase from the reduce phase
//! - Reducers that split the alphabet into contiguous ranges and write one
//!   sorted `<letter>.txt` file per letter
//!
//! ## Example
//!
//! ```no_run
//! use alphadex::mapreduce::{IndexingPipeline, PipelineConfig};
//!
//! let pipeline = IndexingPipeline::new(PipelineConfig::new(4, 2).with_output_dir("out"))?;
//! let report = pipeline.run(["docs/one.txt", "docs/two.txt"])?;
//! println!("{} distinct words", report.distinct_words);
//! # Ok::<(), alphadex::error::AlphadexError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod mapreduce;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
