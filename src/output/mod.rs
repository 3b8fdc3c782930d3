//! Writing the merged pack, the summary, and per-collection copies.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::{
    LoadResult, MergedCollection, SummaryReport, MERGED_FILE_NAME, SUMMARY_FILE_NAME,
};
use crate::merge::source_stats;
use crate::progress::{ProgressEvent, ProgressSink};
use crate::utils::sanitize_label;

pub struct OutputOptions<'a> {
    pub output_dir: &'a Path,
    pub description: &'a str,
    pub write_individual: bool,
}

/// Build the summary for a finished merge, stamped with the current time.
pub fn build_summary(
    merged: &MergedCollection,
    results: &[LoadResult],
    description: &str,
) -> SummaryReport {
    SummaryReport {
        total: merged.total(),
        original_total: merged.original_total,
        duplicates_removed: merged.duplicates_removed(),
        sources: source_stats(results),
        created: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        description: description.to_string(),
    }
}

/// Path of the per-collection copy for `label`.
pub fn individual_path(output_dir: &Path, label: &str) -> PathBuf {
    output_dir.join(format!("{}.json", sanitize_label(label)))
}

/// Write every output file and return the paths written, in order.
///
/// Any I/O failure aborts immediately; files already written stay in place.
pub fn write_outputs(
    options: &OutputOptions<'_>,
    merged: &MergedCollection,
    results: &[LoadResult],
    sink: &mut dyn ProgressSink,
) -> Result<Vec<PathBuf>> {
    let output_dir = options.output_dir;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed creating output directory: {}", output_dir.display()))?;

    let mut written = Vec::new();

    let merged_path = output_dir.join(MERGED_FILE_NAME);
    write_pretty_json(&merged_path, &merged.records)?;
    sink.emit(ProgressEvent::Written { label: None, path: &merged_path });
    written.push(merged_path);

    let summary = build_summary(merged, results, options.description);
    let summary_path = output_dir.join(SUMMARY_FILE_NAME);
    write_pretty_json(&summary_path, &summary)?;
    sink.emit(ProgressEvent::Written { label: None, path: &summary_path });
    written.push(summary_path);

    if options.write_individual {
        let mut claimed: HashMap<PathBuf, &str> = HashMap::new();
        for result in results {
            let path = individual_path(output_dir, &result.label);
            if let Some(previous) = claimed.insert(path.clone(), &result.label) {
                tracing::warn!(
                    "Labels '{}' and '{}' share output file {}; keeping the later one",
                    previous,
                    result.label,
                    path.display()
                );
            }
            write_pretty_json(&path, &result.records)?;
            sink.emit(ProgressEvent::Written { label: Some(&result.label), path: &path });
            written.push(path);
        }
    }

    Ok(written)
}

fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed serializing {}", path.display()))?;
    fs::write(path, content).with_context(|| format!("Failed writing {}", path.display()))
}
