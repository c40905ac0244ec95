//! Partial and shared inverted indices.
//!
//! Each mapper fills its own [`PartialIndex`] without locking and merges it
//! into the [`SharedIndex`] exactly once. The shared index is only read after
//! the phase barrier, when no further merges can happen.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::mapreduce::queue::FileId;

/// Set of file IDs containing a word, kept in ascending order.
pub type Postings = BTreeSet<FileId>;

/// Word to postings map private to one mapper.
#[derive(Debug, Clone, Default)]
pub struct PartialIndex {
    terms: AHashMap<String, Postings>,
}

impl PartialIndex {
    /// Create an empty partial index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `word` occurs in file `id`.
    pub fn insert(&mut self, word: String, id: FileId) {
        self.terms.entry(word).or_default().insert(id);
    }

    /// Move every entry of `other` into this index.
    pub fn absorb(&mut self, other: PartialIndex) {
        for (word, postings) in other.terms {
            self.terms.entry(word).or_default().extend(postings);
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no word has been recorded.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Postings of `word`, if recorded.
    pub fn get(&self, word: &str) -> Option<&Postings> {
        self.terms.get(word)
    }
}

/// The index all mappers merge into and all reducers read from.
///
/// Merges take the write lock once per mapper for the whole partial index,
/// not once per word.
#[derive(Debug, Default)]
pub struct SharedIndex {
    terms: RwLock<AHashMap<String, Postings>>,
}

impl SharedIndex {
    /// Create an empty shared index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Union every entry of `partial` into this index.
    ///
    /// Returns the number of distinct words merged.
    pub fn merge(&self, partial: PartialIndex) -> usize {
        let merged = partial.terms.len();
        let mut terms = self.terms.write();

        for (word, postings) in partial.terms {
            match terms.entry(word) {
                Entry::Occupied(mut entry) => entry.get_mut().extend(postings),
                Entry::Vacant(entry) => {
                    entry.insert(postings);
                }
            }
        }

        merged
    }

    /// Copy out every entry whose word satisfies `predicate`.
    pub fn select<F>(&self, mut predicate: F) -> Vec<(String, Postings)>
    where
        F: FnMut(&str) -> bool,
    {
        self.terms
            .read()
            .iter()
            .filter(|(word, _)| predicate(word))
            .map(|(word, postings)| (word.clone(), postings.clone()))
            .collect()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.terms.read().len()
    }

    /// Whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.terms.read().is_empty()
    }

    /// Ordered copy of the whole index, with postings as ascending lists.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<FileId>> {
        self.terms
            .read()
            .iter()
            .map(|(word, postings)| (word.clone(), postings.iter().copied().collect()))
            .collect()
    }
}
