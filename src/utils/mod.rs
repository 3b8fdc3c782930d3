//! Utility functions

pub mod encoding;
pub mod format;
pub mod paths;

pub use encoding::strip_utf8_bom;
pub use format::{format_mib, truncate_chars};
pub use paths::sanitize_label;
