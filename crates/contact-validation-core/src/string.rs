//! String validation functions

/// True when `s` holds at least `min` characters.
///
/// Counts Unicode scalar values rather than bytes, so "Zoë" is three long.
pub fn has_min_chars(s: &str, min: usize) -> bool {
    s.chars().take(min).count() >= min
}

/// Required-field check. Any content counts, whitespace included.
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}
