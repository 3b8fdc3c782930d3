//! Loading book source collections from disk.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::domain::{display_name, InputFileDescriptor, LoadResult};
use crate::error::LoadError;
use crate::progress::{ProgressEvent, ProgressSink, EXAMPLE_NAMES};
use crate::utils::strip_utf8_bom;

/// Read and parse one collection. Emits no progress events.
pub fn read_source_file(
    sources_dir: &Path,
    descriptor: &InputFileDescriptor,
) -> Result<LoadResult, LoadError> {
    let path = sources_dir.join(&descriptor.file);

    let bytes = fs::read(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::Missing { path: path.clone() },
        _ => LoadError::Read { path: path.clone(), source },
    })?;
    let size_bytes = bytes.len() as u64;

    let records = match serde_json::from_slice::<Value>(strip_utf8_bom(&bytes))? {
        Value::Array(records) => records,
        other => return Err(LoadError::NotArray { found: json_kind(&other) }),
    };

    tracing::debug!(
        file = %path.display(),
        records = records.len(),
        size_bytes,
        "loaded book source collection"
    );

    Ok(LoadResult {
        file: descriptor.file.clone(),
        label: descriptor.label.clone(),
        count: records.len(),
        records,
        size_bytes,
    })
}

/// Load one collection, reporting the attempt and its outcome to `sink`.
///
/// Failures are reported and returned as `None`; they never abort the run.
pub fn load_source_file(
    sources_dir: &Path,
    descriptor: &InputFileDescriptor,
    sink: &mut dyn ProgressSink,
) -> Option<LoadResult> {
    sink.emit(ProgressEvent::LoadStarted { label: &descriptor.label });

    match read_source_file(sources_dir, descriptor) {
        Ok(result) => {
            let examples =
                result.records.iter().take(EXAMPLE_NAMES).map(display_name).collect();
            sink.emit(ProgressEvent::Loaded { result: &result, examples });
            Some(result)
        }
        Err(error) => {
            tracing::warn!(file = %descriptor.file, %error, "skipping book source collection");
            sink.emit(ProgressEvent::LoadFailed { label: &descriptor.label, error: &error });
            None
        }
    }
}

/// Load every collection in table order, keeping only the successes.
pub fn load_all(
    sources_dir: &Path,
    descriptors: &[InputFileDescriptor],
    sink: &mut dyn ProgressSink,
) -> Vec<LoadResult> {
    descriptors
        .iter()
        .filter_map(|descriptor| load_source_file(sources_dir, descriptor, sink))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
