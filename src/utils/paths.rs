//! Output file naming

/// Turn a collection label into a file stem.
///
/// Every UTF-16 code unit outside `[A-Za-z0-9]` becomes `_`, so a character
/// outside the Basic Multilingual Plane yields two underscores.
pub fn sanitize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else {
            out.extend(std::iter::repeat('_').take(c.len_utf16()));
        }
    }
    out
}
