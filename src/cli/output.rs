//! Output formatting for the run report.

use std::io::Write;

use crate::cli::args::{AlphadexArgs, OutputFormat};
use crate::error::Result;
use crate::mapreduce::metrics::PipelineReport;

/// Write `report` to `out` in the format selected by `args`.
///
/// Human output is suppressed in quiet mode; JSON output never is.
pub fn output_report<W: Write>(
    out: &mut W,
    report: &PipelineReport,
    args: &AlphadexArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                output_human(out, report, args)?;
            }
        }
        OutputFormat::Json => output_json(out, report)?,
    }
    Ok(())
}

/// Output the report in human-readable format.
fn output_human<W: Write>(out: &mut W, report: &PipelineReport, args: &AlphadexArgs) -> Result<()> {
    writeln!(out, "Index Summary:")?;
    writeln!(out, "══════════════")?;
    writeln!(
        out,
        "Files indexed: {} of {} ({} skipped)",
        report.files_indexed, report.files_queued, report.files_skipped
    )?;
    writeln!(out, "Distinct words: {}", report.distinct_words)?;
    writeln!(
        out,
        "Letter files: {} written, {} skipped",
        report.letters_written, report.letters_skipped
    )?;
    writeln!(out, "Output directory: {}", args.output_dir.display())?;
    writeln!(out, "Map phase: {}ms", report.map_phase_ms)?;
    writeln!(out, "Total time: {}ms", report.elapsed_ms)?;

    if args.verbosity() > 1 {
        writeln!(out)?;
        writeln!(out, "Mappers:")?;
        writeln!(out, "────────")?;
        for mapper in &report.mappers {
            writeln!(
                out,
                "  #{}: {} files, {} skipped, {} words, {} distinct merged",
                mapper.mapper_index,
                mapper.files_indexed,
                mapper.files_skipped,
                mapper.words_indexed,
                mapper.distinct_words_merged
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Reducers:")?;
        writeln!(out, "─────────")?;
        for reducer in &report.reducers {
            writeln!(
                out,
                "  #{} [{}]: {} words in {} files ({} fallback, {} skipped)",
                reducer.reducer_index,
                reducer.letters,
                reducer.words_written,
                reducer.letters_written,
                reducer.fallback_letters,
                reducer.letters_skipped
            )?;
        }
    }

    Ok(())
}

/// Output the report as pretty-printed JSON.
fn output_json<W: Write>(out: &mut W, report: &PipelineReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
