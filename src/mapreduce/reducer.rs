//! Reducer worker.
//!
//! A reducer waits at the phase barrier, then selects the shared-index entries
//! whose first letter falls in its alphabet slice, ranks them, and writes one
//! output file per letter it owns. Reducers never coordinate with each other;
//! their slices are disjoint.

use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::{Arc, Barrier};
use std::time::Instant;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mapreduce::config::EmptyLetterPolicy;
use crate::mapreduce::index::{Postings, SharedIndex};
use crate::mapreduce::output::{self, LetterContent, OutputRecord};
use crate::mapreduce::partitioner::{AlphabetPartitioner, LetterRange};

/// Everything a reducer thread needs for one run.
#[derive(Debug, Clone)]
pub struct ReducerContext {
    /// Ordinal of this thread among all workers. Mappers come first.
    pub thread_index: usize,
    pub num_mappers: usize,
    pub num_reducers: usize,
    pub index: Arc<SharedIndex>,
    pub barrier: Arc<Barrier>,
    pub output_dir: PathBuf,
    pub empty_letter_policy: EmptyLetterPolicy,
}

impl ReducerContext {
    /// 0-based index of this reducer among reducers.
    pub fn reducer_index(&self) -> usize {
        self.thread_index - self.num_mappers
    }
}

/// Work done by one reducer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducerStats {
    pub reducer_index: usize,
    /// Owned letters, e.g. `a-g`, or `-` for none.
    pub letters: String,
    pub words_written: u64,
    pub letters_written: u64,
    pub letters_skipped: u64,
    pub fallback_letters: u64,
    pub elapsed_ms: u64,
}

/// A reducer worker.
pub struct Reducer {
    ctx: ReducerContext,
}

impl Reducer {
    pub fn new(ctx: ReducerContext) -> Self {
        Reducer { ctx }
    }

    /// Wait for the map phase to finish, then write this reducer's letters.
    pub fn run(self) -> Result<ReducerStats> {
        self.ctx.barrier.wait();
        let start = Instant::now();

        let reducer_index = self.ctx.reducer_index();
        let range = AlphabetPartitioner::new(self.ctx.num_reducers)?.range_for(reducer_index)?;

        let mut selection = select_range(&self.ctx.index, range);
        rank_entries(&mut selection);
        debug!(
            "reducer {reducer_index} owns letters {range}: {} words selected",
            selection.len()
        );

        let mut stats = self.write_letters(range, &selection);
        stats.reducer_index = reducer_index;
        stats.letters = range.to_string();
        stats.elapsed_ms = start.elapsed().as_millis() as u64;

        Ok(stats)
    }

    fn write_letters(&self, range: LetterRange, selection: &[(String, Postings)]) -> ReducerStats {
        let mut stats = ReducerStats::default();

        // Ranking is global, so each bucket keeps the ranked order.
        let mut buckets: Vec<Vec<OutputRecord<'_>>> = vec![Vec::new(); range.len()];
        for (word, postings) in selection {
            if let Some(offset) = word.chars().next().and_then(|c| range.offset_of(c)) {
                buckets[offset].push(OutputRecord { word, postings });
            }
        }

        let range_is_empty = selection.is_empty();
        for (letter, records) in range.letters().zip(buckets) {
            let use_fallback = match self.ctx.empty_letter_policy {
                EmptyLetterPolicy::ReducerRange => range_is_empty,
                EmptyLetterPolicy::PerLetter => records.is_empty(),
            };
            let content = if use_fallback {
                LetterContent::Empty
            } else {
                LetterContent::Records(records)
            };

            let path = output::letter_file_path(&self.ctx.output_dir, letter);
            match output::write_letter_file(&path, letter, &content) {
                Ok(written) => {
                    stats.letters_written += 1;
                    stats.words_written += written as u64;
                    if use_fallback {
                        stats.fallback_letters += 1;
                    }
                }
                Err(e) => {
                    stats.letters_skipped += 1;
                    warn!("Failed to write output file {}: {e}", path.display());
                }
            }
        }

        stats
    }
}

/// Copy out the entries of `index` whose first letter lies in `range`.
pub fn select_range(index: &SharedIndex, range: LetterRange) -> Vec<(String, Postings)> {
    if range.is_empty() {
        return Vec::new();
    }
    index.select(|word| word.chars().next().is_some_and(|c| range.contains(c)))
}

/// Order entries by descending number of files, then ascending word.
pub fn rank_entries(entries: &mut [(String, Postings)]) {
    entries.sort_unstable_by(|(word_a, files_a), (word_b, files_b)| {
        match files_b.len().cmp(&files_a.len()) {
            Ordering::Equal => word_a.cmp(word_b),
            order => order,
        }
    });
}
