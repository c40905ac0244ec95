//! Work queue feeding input files to mapper threads.

use std::collections::VecDeque;
use std::path::PathBuf;

use parking_lot::Mutex;

/// Identifier of an input file, equal to its 1-based manifest position.
pub type FileId = u32;

/// A file handed to a mapper, together with its file ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub id: FileId,
    pub path: PathBuf,
}

#[derive(Debug)]
struct QueueState {
    files: VecDeque<PathBuf>,
    next_id: FileId,
}

/// Mutex-protected FIFO of file paths.
///
/// File IDs are assigned at dequeue time from a counter guarded by the same
/// lock as the queue, so the n-th path enqueued always receives ID `n`
/// regardless of which thread dequeues it.
#[derive(Debug)]
pub struct WorkQueue {
    state: Mutex<QueueState>,
}

impl WorkQueue {
    /// Create an empty queue. The first dequeued file gets ID 1.
    pub fn new() -> Self {
        WorkQueue {
            state: Mutex::new(QueueState {
                files: VecDeque::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a queue holding `paths` in order.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let queue = WorkQueue::new();
        {
            let mut state = queue.state.lock();
            state.files.extend(paths.into_iter().map(Into::into));
        }
        queue
    }

    /// Append a path to the tail of the queue.
    pub fn enqueue<P: Into<PathBuf>>(&self, path: P) {
        self.state.lock().files.push_back(path.into());
    }

    /// Pop the head of the queue and assign it the next file ID.
    ///
    /// Returns `None` once the queue is drained. This is a terminal signal for
    /// the caller, not a reason to retry.
    pub fn dequeue(&self) -> Option<WorkItem> {
        let mut state = self.state.lock();
        let path = state.files.pop_front()?;
        let id = state.next_id;
        state.next_id += 1;

        Some(WorkItem { id, path })
    }

    /// Number of paths still waiting.
    pub fn len(&self) -> usize {
        self.state.lock().files.len()
    }

    /// Whether the queue is drained.
    pub fn is_empty(&self) -> bool {
        self.state.lock().files.is_empty()
    }
}

impl Default for WorkQueue {
    fn default() -> Self {
        Self::new()
    }
}
