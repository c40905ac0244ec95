//! Mapper worker.
//!
//! A mapper drains the work queue, indexes every file it dequeues into a
//! private [`PartialIndex`], merges that index into the shared one under a
//! single lock acquisition, and then waits at the phase barrier.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::{Arc, Barrier};
use std::time::Instant;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::WordAnalyzer;
use crate::mapreduce::index::{PartialIndex, SharedIndex};
use crate::mapreduce::queue::{FileId, WorkItem, WorkQueue};

/// Everything a mapper thread needs for one run.
#[derive(Debug, Clone)]
pub struct MapperContext {
    /// 0-based index among mappers, which is also the thread index.
    pub mapper_index: usize,
    pub queue: Arc<WorkQueue>,
    pub index: Arc<SharedIndex>,
    pub barrier: Arc<Barrier>,
    pub analyzer: WordAnalyzer,
}

/// Work done by one mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperStats {
    pub mapper_index: usize,
    pub files_indexed: u64,
    pub files_skipped: u64,
    pub words_indexed: u64,
    pub distinct_words_merged: u64,
    pub elapsed_ms: u64,
}

/// A mapper worker.
pub struct Mapper {
    ctx: MapperContext,
}

impl Mapper {
    pub fn new(ctx: MapperContext) -> Self {
        Mapper { ctx }
    }

    /// Run the mapper to completion, including the barrier wait.
    pub fn run(self) -> MapperStats {
        let start = Instant::now();
        let mut stats = MapperStats {
            mapper_index: self.ctx.mapper_index,
            ..Default::default()
        };

        let mut partial = PartialIndex::new();
        while let Some(item) = self.ctx.queue.dequeue() {
            let outcome = File::open(&item.path)
                .and_then(|file| self.index_reader(BufReader::new(file), item.id));
            self.record(&item, outcome, &mut partial, &mut stats);
        }

        stats.distinct_words_merged = self.ctx.index.merge(partial) as u64;
        debug!(
            "mapper {} merged {} distinct words",
            self.ctx.mapper_index, stats.distinct_words_merged
        );
        stats.elapsed_ms = start.elapsed().as_millis() as u64;

        self.ctx.barrier.wait();
        stats
    }

    /// Index one file into a fresh partial index, returning it with the
    /// number of words found.
    ///
    /// Lines are decoded lossily, so invalid UTF-8 only affects the bytes
    /// involved. Words never span lines because newlines are whitespace.
    fn index_reader<R: BufRead>(
        &self,
        mut reader: R,
        id: FileId,
    ) -> io::Result<(PartialIndex, u64)> {
        let mut file_index = PartialIndex::new();
        let mut line = Vec::new();
        let mut words = 0;

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            let text = String::from_utf8_lossy(&line);
            for word in self.ctx.analyzer.analyze(&text) {
                file_index.insert(word, id);
                words += 1;
            }
        }

        Ok((file_index, words))
    }

    /// Keep a fully read file's words, or count the file as skipped.
    fn record(
        &self,
        item: &WorkItem,
        outcome: io::Result<(PartialIndex, u64)>,
        partial: &mut PartialIndex,
        stats: &mut MapperStats,
    ) {
        match outcome {
            Ok((file_index, words)) => {
                partial.absorb(file_index);
                stats.files_indexed += 1;
                stats.words_indexed += words;
                debug!(
                    "mapper {} indexed file {} ({}): {} words",
                    self.ctx.mapper_index,
                    item.id,
                    item.path.display(),
                    words
                );
            }
            Err(e) => {
                stats.files_skipped += 1;
                warn!(
                    "Failed to read input file {} (id {}): {e}",
                    item.path.display(),
                    item.id
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Read;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn context(queue: WorkQueue, index: &Arc<SharedIndex>, mapper_index: usize) -> MapperContext {
        MapperContext {
            mapper_index,
            queue: Arc::new(queue),
            index: Arc::clone(index),
            barrier: Arc::new(Barrier::new(1)),
            analyzer: WordAnalyzer::default(),
        }
    }

    #[test]
    fn test_mapper_indexes_queue() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("one.txt");
        let second = dir.path().join("two.txt");
        fs::write(&first, "Cat cat DOG").unwrap();
        fs::write(&second, "dog\nfish!\n").unwrap();

        let index = Arc::new(SharedIndex::new());
        let stats = Mapper::new(context(WorkQueue::from_paths([first, second]), &index, 0)).run();

        assert_eq!(stats.files_indexed, 2);
        assert_eq!(stats.files_skipped, 0);
        assert_eq!(stats.words_indexed, 5);
        assert_eq!(stats.distinct_words_merged, 3);

        let snapshot = index.snapshot();
        assert_eq!(snapshot["cat"], vec![1]);
        assert_eq!(snapshot["dog"], vec![1, 2]);
        assert_eq!(snapshot["fish"], vec![2]);
    }

    #[test]
    fn test_unreadable_file_is_skipped_but_keeps_its_id() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        let present = dir.path().join("present.txt");
        fs::write(&present, "hello").unwrap();

        let index = Arc::new(SharedIndex::new());
        let stats =
            Mapper::new(context(WorkQueue::from_paths([missing, present]), &index, 0)).run();

        assert_eq!(stats.files_indexed, 1);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(index.snapshot()["hello"], vec![2]);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, b"good \xff\xfe bad\xffword\n").unwrap();

        let index = Arc::new(SharedIndex::new());
        let stats = Mapper::new(context(WorkQueue::from_paths([path]), &index, 0)).run();

        assert_eq!(stats.files_indexed, 1);
        let snapshot = index.snapshot();
        assert!(snapshot.contains_key("good"));
        assert!(snapshot.contains_key("badword"));
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_empty_queue_still_reaches_barrier() {
        let index = Arc::new(SharedIndex::new());
        let stats = Mapper::new(context(WorkQueue::new(), &index, 3)).run();

        assert_eq!(stats.mapper_index, 3);
        assert_eq!(stats.files_indexed, 0);
        assert!(index.is_empty());
    }

    /// Yields its content once, then fails every later read.
    struct FailingReader {
        content: &'static [u8],
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("device went away"));
            }
            self.served = true;
            buf[..self.content.len()].copy_from_slice(self.content);
            Ok(self.content.len())
        }
    }

    #[test]
    fn test_read_error_mid_file_discards_its_words() {
        let index = Arc::new(SharedIndex::new());
        let mapper = Mapper::new(context(WorkQueue::new(), &index, 0));
        let item = WorkItem {
            id: 1,
            path: PathBuf::from("flaky.txt"),
        };
        let reader = BufReader::new(FailingReader {
            content: b"alpha beta\n",
            served: false,
        });

        let mut partial = PartialIndex::new();
        let mut stats = MapperStats::default();
        let outcome = mapper.index_reader(reader, item.id);
        assert!(outcome.is_err());
        mapper.record(&item, outcome, &mut partial, &mut stats);

        assert!(partial.is_empty());
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(stats.files_indexed, 0);
        assert_eq!(stats.words_indexed, 0);
    }
}
