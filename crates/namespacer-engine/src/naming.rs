//! Destination stream-name mapping.

/// Prepend `prefix` to `name` with no separator.
///
/// An absent or empty prefix returns `name` unchanged. Not idempotent:
/// applying the same prefix twice prefixes twice.
#[must_use]
pub fn apply_prefix(name: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => {
            let mut out = String::with_capacity(prefix.len() + name.len());
            out.push_str(prefix);
            out.push_str(name);
            out
        }
        _ => name.to_owned(),
    }
}
