//! End-to-end run: load, merge, write.

use anyhow::Result;

use crate::domain::Config;
use crate::load::load_all;
use crate::merge::merge_results;
use crate::output::{write_outputs, OutputOptions};
use crate::progress::{ProgressEvent, ProgressSink};

/// Run the whole pipeline and return the number of unique book sources.
///
/// Load failures are reported and skipped. When no collection loads, nothing
/// is written and the result is 0. Write failures are returned as errors.
pub fn run_pipeline(config: &Config, sink: &mut dyn ProgressSink) -> Result<usize> {
    sink.emit(ProgressEvent::RunStarted);

    let results = load_all(&config.sources_dir, &config.sources, sink);
    let total_records = results.iter().map(|r| r.count).sum();
    sink.emit(ProgressEvent::LoadSummary { results: &results, total_records });

    if results.is_empty() {
        tracing::warn!(
            sources_dir = %config.sources_dir.display(),
            "no book source collections loaded"
        );
        sink.emit(ProgressEvent::Finished { loaded_files: 0, unique: 0 });
        return Ok(0);
    }

    sink.emit(ProgressEvent::MergeStarted);
    let merged = merge_results(&results);
    sink.emit(ProgressEvent::Merged { before: merged.original_total, after: merged.total() });

    let options = OutputOptions {
        output_dir: &config.output_dir,
        description: &config.description,
        write_individual: config.write_individual,
    };
    write_outputs(&options, &merged, &results, sink)?;

    sink.emit(ProgressEvent::Finished { loaded_files: results.len(), unique: merged.total() });
    Ok(merged.total())
}
