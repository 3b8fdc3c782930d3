//! Core domain types shared by the loader, merger, and writer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

pub mod record;

pub use record::{display_name, field_with_fallback, natural_key, SourceRecord};

/// Fixed description stored in every summary report.
pub const DEFAULT_DESCRIPTION: &str = "来自legado.aoaostar.com的优质书源合集";

/// Directory the input collections are read from.
pub const DEFAULT_SOURCES_DIR: &str = "legado-release/sources";

/// Directory all output files are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "docs/sources/aoaostar_sources";

pub const MERGED_FILE_NAME: &str = "merged_all_sources.json";
pub const SUMMARY_FILE_NAME: &str = "sources_summary.json";

/// One input collection: the file name under the sources directory and the
/// label used in logs, statistics, and the per-collection output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFileDescriptor {
    pub file: String,
    pub label: String,
}

impl InputFileDescriptor {
    pub fn new(file: impl Into<String>, label: impl Into<String>) -> Self {
        Self { file: file.into(), label: label.into() }
    }
}

/// The built-in collection table, in merge order.
pub fn default_source_files() -> Vec<InputFileDescriptor> {
    [
        ("71e56d4f.json", "XIU2精品书源"),
        ("4dc410d1.json", "破冰书源"),
        ("e29e19ee.json", "shidahuilang书源"),
        ("e3e5d620.json", "关耳女频书源"),
        ("2a1f129b.json", "三舞313书源"),
        ("3bb7b751.json", "开源阅读软件书源"),
        ("b778fe6b.json", "全量书源(4026)"),
    ]
    .into_iter()
    .map(|(file, label)| InputFileDescriptor::new(file, label))
    .collect()
}

/// Run configuration after merging defaults, config file, and CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sources_dir: PathBuf,
    pub output_dir: PathBuf,
    pub description: String,
    /// Write each loaded collection to its own file next to the merged pack.
    pub write_individual: bool,
    pub sources: Vec<InputFileDescriptor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources_dir: PathBuf::from(DEFAULT_SOURCES_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            description: DEFAULT_DESCRIPTION.to_string(),
            write_individual: true,
            sources: default_source_files(),
        }
    }
}

/// A successfully loaded collection.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub file: String,
    pub label: String,
    pub count: usize,
    pub records: Vec<SourceRecord>,
    pub size_bytes: u64,
}

impl LoadResult {
    /// File size in MiB with two decimals and an `MB` suffix, e.g. `1.25MB`.
    pub fn file_size(&self) -> String {
        crate::utils::format_mib(self.size_bytes)
    }
}

/// Deduplicated records in first-seen order, plus the pre-dedup total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedCollection {
    pub records: Vec<SourceRecord>,
    pub original_total: usize,
}

impl MergedCollection {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn duplicates_removed(&self) -> usize {
        self.original_total - self.records.len()
    }
}

/// Contents of `sources_summary.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub total: usize,
    pub original_total: usize,
    pub duplicates_removed: usize,
    /// Label to record count, in input order.
    pub sources: Map<String, Value>,
    pub created: String,
    pub description: String,
}
