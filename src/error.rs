//! Per-file load failures.
//!
//! Every variant is recoverable: the pipeline logs it and moves on to the
//! next collection. Output-stage failures are `anyhow` errors and abort.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("not a book source array (top-level JSON {found})")]
    NotArray { found: &'static str },
}

impl LoadError {
    /// Short tag used in progress lines.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Missing { .. } => "missing",
            LoadError::Read { .. } => "unreadable",
            LoadError::Parse(_) | LoadError::NotArray { .. } => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LoadError;
    use std::path::PathBuf;

    #[test]
    fn kinds_distinguish_missing_from_parse() {
        let missing = LoadError::Missing { path: PathBuf::from("a.json") };
        let not_array = LoadError::NotArray { found: "object" };
        assert_eq!(missing.kind(), "missing");
        assert_eq!(not_array.kind(), "parse");
        assert!(not_array.to_string().contains("object"));
    }
}
