//! Two-phase map/reduce pipeline for building an alphabet-partitioned
//! inverted index.
//!
//! This module provides:
//! - A FIFO work queue that hands out input files together with their file IDs
//! - Mapper workers that index files privately and merge once into a shared index
//! - A single phase barrier separating the map phase from the reduce phase
//! - Reducer workers that each own a contiguous slice of the alphabet and
//!   write one sorted output file per letter
//! - An orchestrator that wires the pieces together for one run

pub mod config;
pub mod engine;
pub mod index;
pub mod mapper;
pub mod metrics;
pub mod output;
pub mod partitioner;
pub mod queue;
pub mod reducer;

pub use config::{EmptyLetterPolicy, PipelineConfig};
pub use engine::IndexingPipeline;
pub use index::{PartialIndex, Postings, SharedIndex};
pub use metrics::PipelineReport;
pub use partitioner::{AlphabetPartitioner, LetterRange};
pub use queue::{FileId, WorkItem, WorkQueue};
