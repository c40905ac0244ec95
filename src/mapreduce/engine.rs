//! Pipeline orchestration.
//!
//! [`IndexingPipeline`] owns the work queue, the shared index, and the phase
//! barrier for one run. It spawns `num_mappers` mapper threads followed by
//! `num_reducers` reducer threads and joins all of them before returning.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Barrier};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{Level, debug, info, log_enabled};
use parking_lot::{Condvar, Mutex};

use crate::analysis::analyzer::WordAnalyzer;
use crate::error::{AlphadexError, Result};
use crate::mapreduce::config::PipelineConfig;
use crate::mapreduce::index::SharedIndex;
use crate::mapreduce::mapper::{Mapper, MapperContext, MapperStats};
use crate::mapreduce::metrics::PipelineReport;
use crate::mapreduce::partitioner::AlphabetPartitioner;
use crate::mapreduce::queue::WorkQueue;
use crate::mapreduce::reducer::{Reducer, ReducerContext, ReducerStats};

/// Builds the per-letter index for a list of files.
#[derive(Debug, Clone)]
pub struct IndexingPipeline {
    config: PipelineConfig,
    analyzer: WordAnalyzer,
}

impl IndexingPipeline {
    /// Create a pipeline after validating `config`.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(IndexingPipeline {
            config,
            analyzer: WordAnalyzer::default(),
        })
    }

    /// Index `paths`, where the n-th path receives file ID `n`, and write the
    /// letter files into the configured output directory.
    ///
    /// If any worker thread cannot be spawned, the workers already started
    /// exit without reading input and the spawn error is returned.
    pub fn run<I, P>(&self, paths: I) -> Result<PipelineReport>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let start = Instant::now();
        let config = &self.config;

        fs::create_dir_all(&config.output_dir).map_err(|e| {
            AlphadexError::config(format!(
                "cannot create output directory {}: {e}",
                config.output_dir.display()
            ))
        })?;

        let queue = Arc::new(WorkQueue::from_paths(paths));
        let files_queued = queue.len() as u64;
        let index = Arc::new(SharedIndex::new());
        let barrier = Arc::new(Barrier::new(config.total_threads()));

        info!(
            "Indexing {files_queued} files with {} mappers and {} reducers",
            config.num_mappers, config.num_reducers
        );
        if log_enabled!(Level::Debug) {
            let partitioner = AlphabetPartitioner::new(config.num_reducers)?;
            let layout: Vec<String> =
                partitioner.ranges().iter().map(ToString::to_string).collect();
            debug!("{}: {}", partitioner.description(), layout.join(" "));
        }

        let gate = Arc::new(StartGate::default());
        let mut spawn_error = None;

        let mut mapper_handles: Vec<JoinHandle<Option<MapperStats>>> =
            Vec::with_capacity(config.num_mappers);
        for mapper_index in 0..config.num_mappers {
            let ctx = MapperContext {
                mapper_index,
                queue: Arc::clone(&queue),
                index: Arc::clone(&index),
                barrier: Arc::clone(&barrier),
                analyzer: self.analyzer.clone(),
            };
            let name = format!("mapper-{mapper_index}");
            match spawn_worker(name, &gate, move || Mapper::new(ctx).run()) {
                Ok(handle) => mapper_handles.push(handle),
                Err(e) => {
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        let mut reducer_handles: Vec<JoinHandle<Option<Result<ReducerStats>>>> =
            Vec::with_capacity(config.num_reducers);
        if spawn_error.is_none() {
            for thread_index in config.num_mappers..config.total_threads() {
                let ctx = ReducerContext {
                    thread_index,
                    num_mappers: config.num_mappers,
                    num_reducers: config.num_reducers,
                    index: Arc::clone(&index),
                    barrier: Arc::clone(&barrier),
                    output_dir: config.output_dir.clone(),
                    empty_letter_policy: config.empty_letter_policy,
                };
                let name = format!("reducer-{}", ctx.reducer_index());
                match spawn_worker(name, &gate, move || Reducer::new(ctx).run()) {
                    Ok(handle) => reducer_handles.push(handle),
                    Err(e) => {
                        spawn_error = Some(e);
                        break;
                    }
                }
            }
        }

        // Released workers return before touching the queue or the barrier.
        if let Some(e) = spawn_error {
            gate.open(false);
            let _ = join_all(mapper_handles);
            let _ = join_all(reducer_handles);
            return Err(e);
        }
        gate.open(true);

        let mappers: Vec<_> = join_all(mapper_handles)?.into_iter().flatten().collect();
        let reducers = join_all(reducer_handles)?
            .into_iter()
            .flatten()
            .collect::<Result<Vec<_>>>()?;

        let mut report =
            PipelineReport::from_stats(files_queued, index.len() as u64, mappers, reducers);
        report.elapsed_ms = start.elapsed().as_millis() as u64;

        info!(
            "Indexed {} of {} files ({} skipped), {} distinct words, {} letter files in {}ms",
            report.files_indexed,
            report.files_queued,
            report.files_skipped,
            report.distinct_words,
            report.letters_written,
            report.elapsed_ms
        );

        Ok(report)
    }
}

/// Holds spawned workers until the launch is known to be complete.
///
/// `open(true)` lets every worker proceed. `open(false)` makes them return
/// without doing any work, so a partial launch never leaves threads blocked
/// at the phase barrier.
#[derive(Debug, Default)]
struct StartGate {
    state: Mutex<Option<bool>>,
    opened: Condvar,
}

impl StartGate {
    fn open(&self, proceed: bool) {
        *self.state.lock() = Some(proceed);
        self.opened.notify_all();
    }

    fn wait(&self) -> bool {
        let mut state = self.state.lock();
        loop {
            if let Some(proceed) = *state {
                return proceed;
            }
            self.opened.wait(&mut state);
        }
    }
}

/// Spawn a named worker that runs `work` once `gate` opens with `true`.
fn spawn_worker<F, T>(
    name: String,
    gate: &Arc<StartGate>,
    work: F,
) -> Result<JoinHandle<Option<T>>>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let gate = Arc::clone(gate);
    thread::Builder::new()
        .name(name.clone())
        .spawn(move || gate.wait().then(work))
        .map_err(|e| AlphadexError::thread_join(format!("failed to spawn {name}: {e}")))
}

/// Join every handle before reporting the first failure.
fn join_all<T>(handles: Vec<JoinHandle<T>>) -> Result<Vec<T>> {
    let mut results = Vec::with_capacity(handles.len());
    let mut failure = None;

    for handle in handles {
        let name = handle.thread().name().unwrap_or("worker").to_string();
        match handle.join() {
            Ok(value) => results.push(value),
            Err(_) if failure.is_none() => {
                failure = Some(AlphadexError::thread_join(format!("{name} panicked")));
            }
            Err(_) => {}
        }
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(results),
    }
}
