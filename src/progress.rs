//! Status events emitted while the pipeline runs.
//!
//! The loader, merger, and writer never print directly; they hand events to a
//! [`ProgressSink`]. The CLI installs [`ConsoleProgress`], tests install
//! [`SilentProgress`] or their own recorder.

use std::path::Path;

use crate::domain::LoadResult;
use crate::error::LoadError;
use crate::utils::truncate_chars;

/// Maximum characters of an error message shown in a progress line.
pub const MAX_ERROR_CHARS: usize = 100;

/// Number of example names shown per loaded collection.
pub const EXAMPLE_NAMES: usize = 3;

#[derive(Debug)]
pub enum ProgressEvent<'a> {
    RunStarted,
    LoadStarted { label: &'a str },
    Loaded { result: &'a LoadResult, examples: Vec<&'a str> },
    LoadFailed { label: &'a str, error: &'a LoadError },
    LoadSummary { results: &'a [LoadResult], total_records: usize },
    MergeStarted,
    Merged { before: usize, after: usize },
    Written { label: Option<&'a str>, path: &'a Path },
    Finished { loaded_files: usize, unique: usize },
}

pub trait ProgressSink {
    fn emit(&mut self, event: ProgressEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn emit(&mut self, _event: ProgressEvent<'_>) {}
}

/// Prints human-readable progress to stdout.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn emit(&mut self, event: ProgressEvent<'_>) {
        for line in render_event(&event) {
            println!("{line}");
        }
    }
}

/// Console lines for one event. An empty string is a blank separator line.
pub fn render_event(event: &ProgressEvent<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    match event {
        ProgressEvent::RunStarted => {
            lines.push("🚀 Processing legado book source files...".to_string());
            lines.push(String::new());
        }
        ProgressEvent::LoadStarted { label } => {
            lines.push(format!("📖 Loading {label}..."));
        }
        ProgressEvent::Loaded { result, examples } => {
            lines.push(format!("✅ {}: {} book sources", result.label, result.count));
            if !examples.is_empty() {
                lines.push("   Examples:".to_string());
                for (i, name) in examples.iter().enumerate() {
                    lines.push(format!("     {}. {}", i + 1, name));
                }
            }
            lines.push(String::new());
        }
        ProgressEvent::LoadFailed { label, error } => {
            let message = error.to_string();
            lines.push(format!(
                "❌ {label}: {} - {}",
                error.kind(),
                truncate_chars(&message, MAX_ERROR_CHARS)
            ));
            lines.push(String::new());
        }
        ProgressEvent::LoadSummary { results, total_records } => {
            let rule = "=".repeat(50);
            lines.push("📊 Load statistics:".to_string());
            lines.push(rule.clone());
            for result in results.iter() {
                lines.push(format!(
                    "{}: {} book sources ({})",
                    result.label,
                    result.count,
                    result.file_size()
                ));
            }
            lines.push(rule);
            lines.push(format!("Total: {total_records} book sources"));
            lines.push(format!("Files loaded: {}", results.len()));
        }
        ProgressEvent::MergeStarted => {
            lines.push(String::new());
            lines.push("🔄 Merging book sources...".to_string());
        }
        ProgressEvent::Merged { before, after } => {
            lines.push(format!("Before dedup: {before} book sources"));
            lines.push(format!("After dedup:  {after} book sources"));
        }
        ProgressEvent::Written { label, path } => match label {
            Some(label) => lines.push(format!("✅ Saved {label} to: {}", path.display())),
            None => lines.push(format!("✅ Saved: {}", path.display())),
        },
        ProgressEvent::Finished { loaded_files, unique } => {
            lines.push(String::new());
            if *loaded_files > 0 {
                lines.push("🎉 All book sources processed!".to_string());
            } else {
                lines.push(
                    "⚠️ No book source files could be loaded; nothing written.".to_string(),
                );
            }
            lines.push(format!("Unique book sources: {unique}"));
        }
    }
    lines
}
