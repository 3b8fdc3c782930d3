//! Human-readable formatting for progress output.

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Format a byte count as MiB with two decimals and an `MB` suffix.
///
/// Ties round up (`0.125` becomes `0.13`), not to even.
pub fn format_mib(bytes: u64) -> String {
    let hundredths = (bytes as f64 / BYTES_PER_MIB * 100.0).round();
    format!("{:.2}MB", hundredths / 100.0)
}

/// Keep at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
