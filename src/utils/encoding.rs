//! Byte-level cleanup before JSON parsing.

const UTF8_BOM: [u8; 3] = [0xef, 0xbb, 0xbf];

/// Drop a leading UTF-8 byte order mark, if present.
///
/// Collections exported from some Windows tools carry a BOM, which
/// `serde_json` rejects as an unexpected character.
pub fn strip_utf8_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes)
}
