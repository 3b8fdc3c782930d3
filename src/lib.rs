//! book-source-merge: Merge Legado book source collections
//!
//! Loads several JSON arrays of book source records, deduplicates them by
//! source URL, and writes a merged pack, per-collection copies, and a summary.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod load;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod utils;

pub use domain::Config;
pub use pipeline::run_pipeline;
