//! Run report aggregated from per-worker statistics.

use serde::{Deserialize, Serialize};

use crate::mapreduce::mapper::MapperStats;
use crate::mapreduce::reducer::ReducerStats;

/// Summary of one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Files listed in the manifest.
    pub files_queued: u64,

    /// Files read and indexed by mappers.
    pub files_indexed: u64,

    /// Files mappers could not read.
    pub files_skipped: u64,

    /// Distinct words in the merged index.
    pub distinct_words: u64,

    /// Word lines written across all letter files.
    pub words_written: u64,

    /// Letter files written successfully.
    pub letters_written: u64,

    /// Letter files reducers could not write.
    pub letters_skipped: u64,

    /// Slowest mapper, from start to merge.
    pub map_phase_ms: u64,

    /// Wall-clock time of the whole run.
    pub elapsed_ms: u64,

    /// Per-mapper statistics, ordered by mapper index.
    pub mappers: Vec<MapperStats>,

    /// Per-reducer statistics, ordered by reducer index.
    pub reducers: Vec<ReducerStats>,
}

impl PipelineReport {
    /// Aggregate worker statistics into a report.
    pub fn from_stats(
        files_queued: u64,
        distinct_words: u64,
        mut mappers: Vec<MapperStats>,
        mut reducers: Vec<ReducerStats>,
    ) -> Self {
        mappers.sort_by_key(|stats| stats.mapper_index);
        reducers.sort_by_key(|stats| stats.reducer_index);

        PipelineReport {
            files_queued,
            files_indexed: mappers.iter().map(|m| m.files_indexed).sum(),
            files_skipped: mappers.iter().map(|m| m.files_skipped).sum(),
            distinct_words,
            words_written: reducers.iter().map(|r| r.words_written).sum(),
            letters_written: reducers.iter().map(|r| r.letters_written).sum(),
            letters_skipped: reducers.iter().map(|r| r.letters_skipped).sum(),
            map_phase_ms: mappers.iter().map(|m| m.elapsed_ms).max().unwrap_or(0),
            elapsed_ms: 0,
            mappers,
            reducers,
        }
    }

    /// Whether every input file and every letter file was handled.
    pub fn is_complete(&self) -> bool {
        self.files_skipped == 0 && self.letters_skipped == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregation() {
        let mappers = vec![
            MapperStats {
                mapper_index: 1,
                files_indexed: 2,
                files_skipped: 1,
                elapsed_ms: 40,
                ..Default::default()
            },
            MapperStats {
                mapper_index: 0,
                files_indexed: 3,
                elapsed_ms: 25,
                ..Default::default()
            },
        ];
        let reducers = vec![
            ReducerStats {
                reducer_index: 1,
                words_written: 7,
                letters_written: 13,
                ..Default::default()
            },
            ReducerStats {
                reducer_index: 0,
                words_written: 5,
                letters_written: 12,
                letters_skipped: 1,
                ..Default::default()
            },
        ];

        let report = PipelineReport::from_stats(6, 12, mappers, reducers);

        assert_eq!(report.files_indexed, 5);
        assert_eq!(report.files_skipped, 1);
        assert_eq!(report.words_written, 12);
        assert_eq!(report.letters_written, 25);
        assert_eq!(report.letters_skipped, 1);
        assert_eq!(report.map_phase_ms, 40);
        assert_eq!(report.mappers[0].mapper_index, 0);
        assert_eq!(report.reducers[0].reducer_index, 0);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_report_serializes() {
        let report = PipelineReport::from_stats(0, 0, Vec::new(), Vec::new());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["files_queued"], 0);
        assert!(value["mappers"].as_array().unwrap().is_empty());
        assert!(report.is_complete());
    }
}
